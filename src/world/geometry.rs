//! Geometry primitives
//!
//! Integer points and immutable placed rooms.

use serde::{Deserialize, Serialize};

/// A grid position. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point
    pub fn manhattan(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared Euclidean distance; orders the same as the true distance
    pub fn distance_squared(&self, other: &Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// The four axis-aligned neighbours: north, east, south, west
    pub fn cardinal_neighbors(&self) -> [Point; 4] {
        [
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(0, 1),
            self.offset(-1, 0),
        ]
    }
}

/// Footprint shape of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomShape {
    Square,
    Rectangle,
    Cross,
    Diamond,
}

impl RoomShape {
    pub const ALL: [RoomShape; 4] = [
        RoomShape::Square,
        RoomShape::Rectangle,
        RoomShape::Cross,
        RoomShape::Diamond,
    ];

    /// Only rectangles get an independent height
    pub fn is_regular(&self) -> bool {
        !matches!(self, RoomShape::Rectangle)
    }
}

/// A placed room. Derived fields are fixed at construction; moving a room
/// means building a new one with [`Room::moved_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    height: i32,
    width: i32,
    position: Point,
    shape: RoomShape,
    center: Point,
    top_left: Point,
    bottom_right: Point,
}

impl Room {
    pub fn new(position: Point, width: i32, height: i32, shape: RoomShape) -> Self {
        assert!(width > 0 && height > 0, "room size must be positive");
        Self {
            height,
            width,
            position,
            shape,
            center: Point::new(position.x + width / 2, position.y + height / 2),
            top_left: position,
            bottom_right: Point::new(position.x + width - 1, position.y + height - 1),
        }
    }

    /// Same size and shape at a new origin
    pub fn moved_to(&self, position: Point) -> Self {
        Self::new(position, self.width, self.height, self.shape)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Inclusive top-left cell
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Inclusive bottom-right cell
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// True when the two rooms leave a gap of at least `2 * buffer` cells
    /// between them on at least one axis
    pub fn clears(&self, other: &Room, buffer: i32) -> bool {
        // Exclusive right/bottom edges grown by `buffer` against the other
        // room's left/top edge shrunk by `buffer`
        let self_right = self.position.x + self.width + buffer;
        let self_bottom = self.position.y + self.height + buffer;
        let other_right = other.position.x + other.width + buffer;
        let other_bottom = other.position.y + other.height + buffer;

        self_right <= other.position.x - buffer
            || other_right <= self.position.x - buffer
            || self_bottom <= other.position.y - buffer
            || other_bottom <= self.position.y - buffer
    }
}
