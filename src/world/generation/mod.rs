//! Procedural level generation
//!
//! One synchronous pass from a seed: place rooms, connect them, carve both
//! into a tile grid, inflate, autotile, then summarise.

pub mod autotile;
pub mod corridors;
pub mod pathfinding;
pub mod render;
pub mod rooms;

pub use corridors::{CorridorBuilder, CorridorPlan};
pub use pathfinding::{GridPathfinder, PathingGrid};
pub use rooms::RoomPlacer;

use crate::data::GenerationConfig;
use crate::rng::DungeonRng;
use crate::world::geometry::{Point, Room};
use crate::world::map::TileGrid;
use crate::world::stats::{LevelStats, RoomSize};
use crate::world::tile::TileType;

/// A finished dungeon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub seed: u32,
    /// Post-inflation, autotiled grid
    pub grid: TileGrid,
    pub stats: LevelStats,
}

/// Generate a level. Identical configs give identical levels.
///
/// Rooms that cannot be placed and corridors that cannot be found are
/// dropped; check `stats` for what was actually built.
pub fn generate_level(config: &GenerationConfig) -> Level {
    assert!(config.inflate_factor >= 1, "inflate factor must be at least 1");

    let mut rng = DungeonRng::new(config.seed);
    let mut grid = TileGrid::new(config.width, config.height);

    let rooms = config.room_placer().place(&mut rng);
    let mut corridors = CorridorBuilder::new(
        config.width,
        config.height,
        &rooms,
        config.room_border,
        config.search_limit,
    );
    let plan = corridors.connect(&rooms);

    carve(&mut grid, &plan);
    grid.inflate(config.inflate_factor);
    autotile::autotile(&mut grid);

    let stats = summarize(&grid, &plan, config.inflate_factor);
    log::info!(
        "Generated {}x{} level from seed {}: {} rooms, {} corridors, {} walkable tiles{}",
        grid.width(),
        grid.height(),
        config.seed,
        stats.room_count,
        stats.corridor_count,
        stats.walkable_tiles,
        if stats.chain_complete { "" } else { " (chain broken)" }
    );

    Level { seed: config.seed, grid, stats }
}

/// Paint rooms, then corridors, onto the pre-inflation grid
pub fn carve(grid: &mut TileGrid, plan: &CorridorPlan) {
    for room in &plan.rooms {
        grid.paint(&render::render_room(room), room.position());
    }
    for corridor in &plan.corridors {
        grid.paint_path(corridor);
    }
}

/// Map a pre-inflation cell to the matching cell of its inflated block.
/// For the usual factor of 2 this is `2 * p + 1`.
pub fn scale_point(p: Point, factor: i32) -> Point {
    Point::new(p.x * factor + factor / 2, p.y * factor + factor / 2)
}

fn summarize(grid: &TileGrid, plan: &CorridorPlan, factor: i32) -> LevelStats {
    LevelStats {
        room_count: plan.rooms.len(),
        corridor_count: plan.corridors.len(),
        chain_complete: plan.chain_complete,
        room_centers: plan.rooms.iter().map(|r| scale_point(r.center(), factor)).collect(),
        room_sizes: plan.rooms.iter().map(room_size).collect(),
        walkable_tiles: grid.tiles().iter().filter(|t| t.is_walkable()).count(),
    }
}

fn room_size(room: &Room) -> RoomSize {
    RoomSize { width: room.width(), height: room.height() }
}
