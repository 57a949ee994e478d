//! Cryptforge - seed-deterministic dungeon generation
//!
//! Places rooms, joins them with A* corridors, carves everything into a
//! tile grid and classifies the edges into wall and corner tiles.

pub mod data;
pub mod error;
pub mod rng;
pub mod save;
pub mod world;

// Re-export commonly used types
pub use data::GenerationConfig;
pub use error::DungeonError;
pub use rng::DungeonRng;
pub use world::{generate_level, Level, LevelStats, Point, Room, RoomShape, TileGrid, TileType};
