//! Autotiler
//!
//! Rewrites Floor cells at region edges into wall and corner codes. Matching
//! runs against the untouched grid and only collects paint instructions; the
//! instructions are applied afterwards in collection order, so no pattern
//! ever sees a half-painted neighbourhood.

use crate::world::geometry::Point;
use crate::world::map::TileGrid;
use crate::world::tile::{TileMask, TileType};

use crate::world::tile::TileMask::{Block as B, Open as O, Wild as W};

/// A 3x3 neighbourhood mask and what to paint when it matches.
/// `mask[row][col]` with the matched cell at `[1][1]`.
#[derive(Debug, Clone, Copy)]
pub struct GridPattern {
    pub mask: [[TileMask; 3]; 3],
    /// Offsets are relative to the matched cell
    pub paints: &'static [(Point, TileType)],
}

const HERE: Point = Point::new(0, 0);

/// Fixed, ordered pattern table. Later patterns overwrite earlier ones on
/// the same cell, so corners are listed after the walls they refine.
pub static PATTERNS: [GridPattern; 13] = [
    // Straight walls
    GridPattern {
        mask: [[W, O, W], [B, B, B], [W, B, W]],
        paints: &[(HERE, TileType::TopWall)],
    },
    GridPattern {
        mask: [[W, B, W], [B, B, O], [W, B, W]],
        paints: &[(HERE, TileType::RightWall)],
    },
    GridPattern {
        mask: [[W, B, W], [B, B, B], [W, O, W]],
        paints: &[(HERE, TileType::BottomWall)],
    },
    GridPattern {
        mask: [[W, B, W], [O, B, B], [W, B, W]],
        paints: &[(HERE, TileType::LeftWall)],
    },
    // Outside corners: two adjacent open sides
    GridPattern {
        mask: [[W, O, W], [O, B, B], [W, B, W]],
        paints: &[(HERE, TileType::TopLeftOutsideCorner)],
    },
    GridPattern {
        mask: [[W, O, W], [B, B, O], [W, B, W]],
        paints: &[(HERE, TileType::TopRightOutsideCorner)],
    },
    GridPattern {
        mask: [[W, B, W], [O, B, B], [W, O, W]],
        paints: &[(HERE, TileType::BottomLeftOutsideCorner)],
    },
    GridPattern {
        mask: [[W, B, W], [B, B, O], [W, O, W]],
        paints: &[(HERE, TileType::BottomRightOutsideCorner)],
    },
    // Inside corners: all sides floor, one diagonal open
    GridPattern {
        mask: [[O, B, W], [B, B, B], [W, B, W]],
        paints: &[(HERE, TileType::TopLeftInsideCorner)],
    },
    GridPattern {
        mask: [[W, B, O], [B, B, B], [W, B, W]],
        paints: &[(HERE, TileType::TopRightInsideCorner)],
    },
    GridPattern {
        mask: [[W, B, W], [B, B, B], [O, B, W]],
        paints: &[(HERE, TileType::BottomLeftInsideCorner)],
    },
    GridPattern {
        mask: [[W, B, W], [B, B, B], [W, B, O]],
        paints: &[(HERE, TileType::BottomRightInsideCorner)],
    },
    // Two floor regions touching only at a corner: close both sides
    GridPattern {
        mask: [[B, O, W], [O, B, W], [W, W, W]],
        paints: &[
            (Point::new(-1, -1), TileType::BottomRightOutsideCorner),
            (HERE, TileType::TopLeftOutsideCorner),
        ],
    },
];

/// One staged write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintInstruction {
    pub position: Point,
    pub tile: TileType,
}

impl GridPattern {
    /// Does the neighbourhood around (`x`, `y`) satisfy every non-wild cell?
    pub fn matches(&self, grid: &TileGrid, x: i32, y: i32) -> bool {
        self.mask.iter().enumerate().all(|(row, cells)| {
            cells.iter().enumerate().all(|(col, mask)| {
                let (nx, ny) = (x + col as i32 - 1, y + row as i32 - 1);
                *mask == TileMask::Wild || mask.matches(grid.get(nx, ny))
            })
        })
    }
}

/// Phase one: match every pattern at every interior Floor cell.
/// A pure function of `grid`.
pub fn collect_paints(grid: &TileGrid) -> Vec<PaintInstruction> {
    let mut pending = Vec::new();
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            if grid.get(x, y) != TileType::Floor {
                continue;
            }
            for pattern in PATTERNS.iter().filter(|p| p.matches(grid, x, y)) {
                pending.extend(pattern.paints.iter().map(|(offset, tile)| PaintInstruction {
                    position: Point::new(x + offset.x, y + offset.y),
                    tile: *tile,
                }));
            }
        }
    }
    pending
}

/// Phase two: apply staged writes in order; the last write to a cell wins
pub fn apply_paints(grid: &mut TileGrid, pending: &[PaintInstruction]) {
    for paint in pending {
        grid.set_point(paint.position, paint.tile);
    }
}

/// Run both phases over the grid's interior
pub fn autotile(grid: &mut TileGrid) -> usize {
    let pending = collect_paints(grid);
    apply_paints(grid, &pending);
    log::debug!("Autotile applied {} paints", pending.len());
    pending.len()
}
