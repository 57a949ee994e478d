//! Tile grid
//!
//! The 2D grid of tile codes a dungeon is carved into.

use super::geometry::Point;
use super::tile::TileType;

/// Row-major grid of tile codes. Owns its storage exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Create a grid filled with Empty tiles
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, TileType::Empty)
    }

    /// Create a grid filled with one tile
    pub fn filled(width: i32, height: i32, tile: TileType) -> Self {
        assert!(width >= 0 && height >= 0, "grid size must not be negative");
        Self {
            width,
            height,
            tiles: vec![tile; (width * height) as usize],
        }
    }

    /// Wrap existing row-major storage; `None` when the length is wrong
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<TileType>) -> Option<Self> {
        if width < 0 || height < 0 || tiles.len() != (width * height) as usize {
            return None;
        }
        Some(Self { width, height, tiles })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at position; panics when out of bounds
    pub fn get(&self, x: i32, y: i32) -> TileType {
        assert!(
            self.in_bounds(x, y),
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.tiles[self.xy_to_idx(x, y)]
    }

    /// Tile at position, or `None` outside the grid
    pub fn try_get(&self, x: i32, y: i32) -> Option<TileType> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Set tile at position; panics when out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) {
        assert!(
            self.in_bounds(x, y),
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.xy_to_idx(x, y);
        self.tiles[idx] = tile;
    }

    pub fn set_point(&mut self, point: Point, tile: TileType) {
        self.set(point.x, point.y, tile);
    }

    /// Copy the Floor cells of `source` onto this grid with its top-left at
    /// `origin`. Empty cells in `source` leave the target untouched.
    pub fn paint(&mut self, source: &TileGrid, origin: Point) {
        for y in 0..source.height {
            for x in 0..source.width {
                let tile = source.get(x, y);
                if tile != TileType::Empty {
                    self.set(origin.x + x, origin.y + y, tile);
                }
            }
        }
    }

    /// Paint a single-cell-wide path of Floor
    pub fn paint_path(&mut self, path: &[Point]) {
        for point in path {
            self.set_point(*point, TileType::Floor);
        }
    }

    /// Scale the grid up, replacing each cell with a `factor` x `factor`
    /// block of the same tile
    pub fn inflate(&mut self, factor: i32) {
        assert!(factor >= 1, "inflate factor must be at least 1");
        let width = self.width * factor;
        let height = self.height * factor;
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(self.tiles[self.xy_to_idx(x / factor, y / factor)]);
            }
        }
        self.tiles = tiles;
        self.width = width;
        self.height = height;
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Raw row-major storage
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[TileType]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// Row-major tile codes
    pub fn export(&self) -> Vec<u8> {
        self.tiles.iter().map(TileType::code).collect()
    }

    /// Render as text, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.rows() {
            out.extend(row.iter().map(TileType::glyph));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.tiles().len(), 12);
        assert_eq!(grid.count(TileType::Empty), 12);
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.try_get(4, 0), None);
        assert_eq!(grid.try_get(-1, 0), None);
        assert_eq!(grid.try_get(3, 2), Some(TileType::Empty));
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(0, 3, TileType::Floor);
    }

    #[test]
    fn test_paint_skips_empty() {
        let mut grid = TileGrid::filled(5, 5, TileType::Floor);
        let mut stamp = TileGrid::new(2, 2);
        stamp.set(1, 1, TileType::TopWall);
        grid.paint(&stamp, Point::new(2, 2));
        assert_eq!(grid.get(2, 2), TileType::Floor);
        assert_eq!(grid.get(3, 3), TileType::TopWall);
    }

    #[test]
    fn test_inflate_maps_back_to_source() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(0, 0, TileType::Floor);
        grid.set(2, 1, TileType::Floor);
        let source = grid.clone();

        grid.inflate(3);
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 6);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                assert_eq!(grid.get(x, y), source.get(x / 3, y / 3));
            }
        }
    }

    #[test]
    fn test_inflate_by_one_is_identity() {
        let mut grid = TileGrid::new(3, 3);
        grid.set(1, 1, TileType::Floor);
        let before = grid.clone();
        grid.inflate(1);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_export_and_ascii() {
        let mut grid = TileGrid::new(2, 2);
        grid.set(1, 0, TileType::Floor);
        assert_eq!(grid.export(), vec![1, 0, 1, 1]);
        assert_eq!(grid.to_ascii(), " .\n  \n");
    }
}
