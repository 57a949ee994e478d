//! World module
//!
//! Geometry, tiles, the tile grid, and procedural generation.

pub mod generation;
pub mod geometry;
pub mod map;
pub mod stats;
pub mod tile;

pub use generation::{generate_level, Level};
pub use geometry::{Point, Room, RoomShape};
pub use map::TileGrid;
pub use stats::{LevelStats, RoomSize};
pub use tile::{TileMask, TileType};
