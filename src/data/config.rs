//! Generation parameters
//!
//! Everything a level is generated from, including the seed. Missing fields
//! in a config file fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, Result};
use crate::world::generation::pathfinding::DEFAULT_SEARCH_LIMIT;
use crate::world::generation::rooms::RoomPlacer;
use crate::world::RoomShape;

/// Parameters for one dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Pre-inflation level height
    pub height: i32,
    /// Pre-inflation level width
    pub width: i32,
    pub min_room_width: i32,
    pub max_room_width: i32,
    pub min_room_height: i32,
    pub max_room_height: i32,
    pub rooms: usize,
    /// Cells kept clear around the level edge
    pub border: i32,
    /// Half the minimum gap between rooms
    pub room_border: i32,
    pub allow_overlap: bool,
    /// Empty means rectangles only
    pub shapes: Vec<RoomShape>,
    pub seed: u32,
    pub inflate_factor: i32,
    /// Nodes one corridor search may visit
    pub search_limit: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            height: 64,
            width: 64,
            min_room_width: 5,
            max_room_width: 11,
            min_room_height: 5,
            max_room_height: 11,
            rooms: 12,
            border: 1,
            room_border: 2,
            allow_overlap: false,
            shapes: RoomShape::ALL.to_vec(),
            seed: 1,
            inflate_factor: 2,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_rooms(mut self, rooms: usize) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_room_width(mut self, min: i32, max: i32) -> Self {
        self.min_room_width = min;
        self.max_room_width = max;
        self
    }

    pub fn with_room_height(mut self, min: i32, max: i32) -> Self {
        self.min_room_height = min;
        self.max_room_height = max;
        self
    }

    pub fn with_borders(mut self, border: i32, room_border: i32) -> Self {
        self.border = border;
        self.room_border = room_border;
        self
    }

    pub fn with_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<RoomShape>) -> Self {
        self.shapes = shapes;
        self
    }

    /// Room placer for these parameters
    pub fn room_placer(&self) -> RoomPlacer {
        RoomPlacer {
            level_width: self.width,
            level_height: self.height,
            min_width: self.min_room_width,
            max_width: self.max_room_width,
            min_height: self.min_room_height,
            max_height: self.max_room_height,
            rooms_requested: self.rooms,
            border: self.border,
            room_border: self.room_border,
            allow_overlap: self.allow_overlap,
            shapes: self.shapes.clone(),
        }
    }

    /// Reject parameters generation cannot work with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(DungeonError::InvalidConfig(msg));

        if self.width <= 0 || self.height <= 0 {
            return invalid(format!("level size {}x{} must be positive", self.width, self.height));
        }
        if self.min_room_width <= 0 || self.min_room_width > self.max_room_width {
            return invalid(format!(
                "room width range {}..={} is empty or not positive",
                self.min_room_width, self.max_room_width
            ));
        }
        if self.min_room_height <= 0 || self.min_room_height > self.max_room_height {
            return invalid(format!(
                "room height range {}..={} is empty or not positive",
                self.min_room_height, self.max_room_height
            ));
        }
        if self.border < 0 || self.room_border < 0 {
            return invalid("borders must not be negative".to_string());
        }
        if self.inflate_factor < 1 {
            return invalid(format!("inflate factor {} must be at least 1", self.inflate_factor));
        }
        if self.search_limit == 0 {
            return invalid("search limit must be positive".to_string());
        }
        Ok(())
    }
}
