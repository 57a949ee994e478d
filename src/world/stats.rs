//! Level statistics
//!
//! Summary of a finished level, consumed by spawn placement and exporters.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Pre-inflation room extent.
///
/// This is the full width and height, not a half-extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSize {
    pub width: i32,
    pub height: i32,
}

/// Created once per level and never changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    pub room_count: usize,
    pub corridor_count: usize,
    /// Every consecutive room pair in chain order got a corridor
    pub chain_complete: bool,
    /// Room centers in post-inflation coordinates, chain order
    pub room_centers: Vec<Point>,
    pub room_sizes: Vec<RoomSize>,
    /// Cells still coded Floor after autotiling
    pub walkable_tiles: usize,
}
