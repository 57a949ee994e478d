//! Room footprint rasterizer
//!
//! Each shape produces a local sub-grid of Floor and Empty sized to the room.

use crate::world::geometry::{Room, RoomShape};
use crate::world::map::TileGrid;
use crate::world::tile::TileType;

/// Rasterize a room into a `width` x `height` grid with its own origin
pub fn render_room(room: &Room) -> TileGrid {
    let (width, height) = (room.width(), room.height());
    let mut grid = TileGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let inside = match room.shape() {
                RoomShape::Square | RoomShape::Rectangle => true,
                RoomShape::Diamond => in_diamond(x, y, width, height),
                RoomShape::Cross => in_cross(x, y, width, height),
            };
            if inside {
                grid.set(x, y, TileType::Floor);
            }
        }
    }
    grid
}

/// Band that widens toward the middle row and narrows again
fn in_diamond(x: i32, y: i32, width: i32, height: i32) -> bool {
    let mid_y = height / 2;
    let mid_x = width / 2;
    let half = mid_y - (y - mid_y).abs();
    (x - mid_x).abs() <= half
}

/// Plus shape: the middle third of either axis
fn in_cross(x: i32, y: i32, width: i32, height: i32) -> bool {
    in_middle_third(x, width) || in_middle_third(y, height)
}

fn in_middle_third(i: i32, extent: i32) -> bool {
    if extent <= 1 {
        return true;
    }
    let t = i as f64 / (extent - 1) as f64;
    (1.0 / 3.0..=2.0 / 3.0).contains(&t)
}
