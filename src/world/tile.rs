//! Tile definitions
//!
//! Tile codes and the masks autotile patterns are written in.

use serde::{Deserialize, Serialize};

/// Rendered classification of one grid cell.
///
/// The discriminants are the exported tile codes. Mesh baking and client
/// rendering branch on these integers, so they must never change.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Floor = 0,
    Empty = 1,
    TopLeftInsideCorner = 2,
    TopRightInsideCorner = 3,
    BottomLeftInsideCorner = 4,
    BottomRightInsideCorner = 5,
    TopWall = 6,
    RightWall = 7,
    BottomWall = 8,
    LeftWall = 9,
    TopLeftOutsideCorner = 10,
    TopRightOutsideCorner = 11,
    BottomLeftOutsideCorner = 12,
    BottomRightOutsideCorner = 13,
}

impl TileType {
    pub const ALL: [TileType; 14] = [
        TileType::Floor,
        TileType::Empty,
        TileType::TopLeftInsideCorner,
        TileType::TopRightInsideCorner,
        TileType::BottomLeftInsideCorner,
        TileType::BottomRightInsideCorner,
        TileType::TopWall,
        TileType::RightWall,
        TileType::BottomWall,
        TileType::LeftWall,
        TileType::TopLeftOutsideCorner,
        TileType::TopRightOutsideCorner,
        TileType::BottomLeftOutsideCorner,
        TileType::BottomRightOutsideCorner,
    ];

    /// Exported integer code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Any of the twelve wall or corner variants
    pub fn is_wall(&self) -> bool {
        !matches!(self, TileType::Floor | TileType::Empty)
    }

    /// ASCII preview glyph
    pub fn glyph(&self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Empty => ' ',
            TileType::TopLeftInsideCorner
            | TileType::TopRightInsideCorner
            | TileType::BottomLeftInsideCorner
            | TileType::BottomRightInsideCorner => '+',
            TileType::TopWall | TileType::BottomWall => '-',
            TileType::RightWall | TileType::LeftWall => '|',
            TileType::TopLeftOutsideCorner | TileType::BottomRightOutsideCorner => '/',
            TileType::TopRightOutsideCorner | TileType::BottomLeftOutsideCorner => '\\',
        }
    }
}

impl TryFrom<u8> for TileType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TileType::ALL.get(code as usize).copied().ok_or(code)
    }
}

/// One cell of an autotile pattern mask. Never stored in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMask {
    /// Matches anything
    Wild,
    /// Neighbour must be Empty
    Open,
    /// Neighbour must be Floor
    Block,
}

impl TileMask {
    pub fn matches(&self, tile: TileType) -> bool {
        match self {
            TileMask::Wild => true,
            TileMask::Open => tile == TileType::Empty,
            TileMask::Block => tile == TileType::Floor,
        }
    }
}
