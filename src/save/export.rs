//! Level export
//!
//! Writes finished levels as JSON for mesh baking and client loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DungeonError, Result};
use crate::world::{Level, LevelStats, TileGrid, TileType};

/// Export format version for compatibility checking
pub const EXPORT_VERSION: u32 = 1;

/// World units covered by one exported grid cell
pub const TILE_SIZE: f32 = 1.0;

/// Serialized form of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelExport {
    pub version: u32,
    pub seed: u32,
    pub width: i32,
    pub height: i32,
    pub tile_size: f32,
    /// Row-major tile codes
    pub tiles: Vec<u8>,
    pub stats: LevelStats,
}

impl LevelExport {
    pub fn from_level(level: &Level) -> Self {
        Self {
            version: EXPORT_VERSION,
            seed: level.seed,
            width: level.grid.width(),
            height: level.grid.height(),
            tile_size: TILE_SIZE,
            tiles: level.grid.export(),
            stats: level.stats.clone(),
        }
    }

    /// Rebuild the tile grid from the exported codes
    pub fn to_grid(&self) -> Result<TileGrid> {
        let tiles = self
            .tiles
            .iter()
            .map(|code| {
                TileType::try_from(*code).map_err(|code| {
                    DungeonError::InvalidExport(format!("unknown tile code {}", code))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        TileGrid::from_tiles(self.width, self.height, tiles).ok_or_else(|| {
            DungeonError::InvalidExport(format!(
                "{} tiles do not fill a {}x{} grid",
                self.tiles.len(),
                self.width,
                self.height
            ))
        })
    }
}

pub fn to_json(level: &Level) -> Result<String> {
    Ok(serde_json::to_string(&LevelExport::from_level(level))?)
}

/// Write a level as JSON, creating parent directories
pub fn write_json(level: &Level, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_json(level)?)?;
    log::info!("Level exported to {:?}", path);
    Ok(())
}

/// Read an exported level back
pub fn read_json(path: impl AsRef<Path>) -> Result<LevelExport> {
    let data = fs::read_to_string(path)?;
    let export: LevelExport = serde_json::from_str(&data)?;
    if export.version != EXPORT_VERSION {
        return Err(DungeonError::InvalidExport(format!(
            "export version mismatch: expected {}, found {}",
            EXPORT_VERSION, export.version
        )));
    }
    Ok(export)
}
