//! Corridor builder
//!
//! Orders rooms into a chain and connects each consecutive pair with an A*
//! corridor. The pathing grid is owned here and handed to the pathfinder
//! on every query.

use crate::world::geometry::{Point, Room};

use super::pathfinding::{GridPathfinder, PathingGrid};

/// Result of connecting a set of rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorridorPlan {
    /// Rooms sorted by distance of their center from the origin
    pub rooms: Vec<Room>,
    /// Found corridors, each an ordered run of adjacent points
    pub corridors: Vec<Vec<Point>>,
    /// Every consecutive pair in `rooms` received a corridor
    pub chain_complete: bool,
}

/// Builds corridors between placed rooms
#[derive(Debug)]
pub struct CorridorBuilder {
    grid: PathingGrid,
    pathfinder: GridPathfinder,
}

impl CorridorBuilder {
    /// Derive the pathing grid for `rooms` on a `width` x `height` level
    pub fn new(
        width: i32,
        height: i32,
        rooms: &[Room],
        room_border: i32,
        search_limit: usize,
    ) -> Self {
        Self {
            grid: build_pathing_grid(width, height, rooms, room_border),
            pathfinder: GridPathfinder::with_search_limit(width, height, search_limit),
        }
    }

    /// Pathing grid, including corners blocked by corridors found so far
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    /// Connect rooms in chain order. Later searches see the corners blocked
    /// by earlier corridors, so order shapes the result.
    pub fn connect(&mut self, rooms: &[Room]) -> CorridorPlan {
        let rooms = chain_order(rooms);
        let mut corridors = Vec::new();

        for (i, pair) in rooms.windows(2).enumerate() {
            let (from, to) = (pair[0].center(), pair[1].center());
            let path = self.pathfinder.find_path(&self.grid, from, to);
            if path.is_empty() {
                log::debug!(
                    "No corridor between room {} {:?} and room {} {:?}",
                    i,
                    from,
                    i + 1,
                    to
                );
                continue;
            }
            block_turn_corners(&mut self.grid, &path);
            log::debug!("Corridor {} -> {}: {} cells", i, i + 1, path.len());
            corridors.push(path);
        }

        let chain_complete = corridors.len() == rooms.len().saturating_sub(1);
        if !chain_complete {
            log::warn!(
                "Corridor chain broken: {} of {} links found",
                corridors.len(),
                rooms.len().saturating_sub(1)
            );
        }

        CorridorPlan { rooms, corridors, chain_complete }
    }
}

/// Border blocked; every room's footprint grown by `room_border` blocked
/// except the row and column through its center, which stay open as doorways
pub fn build_pathing_grid(
    width: i32,
    height: i32,
    rooms: &[Room],
    room_border: i32,
) -> PathingGrid {
    let mut grid = PathingGrid::new(width, height);
    grid.block_border();

    for room in rooms {
        let center = room.center();
        let top_left = room.top_left();
        let bottom_right = room.bottom_right();
        for y in top_left.y - room_border..=bottom_right.y + room_border {
            for x in top_left.x - room_border..=bottom_right.x + room_border {
                if x != center.x && y != center.y {
                    grid.block_point(Point::new(x, y));
                }
            }
        }
    }

    grid
}

/// Rooms sorted by ascending distance of their center from (0, 0).
/// The sort is stable, so equidistant rooms keep placement order.
pub fn chain_order(rooms: &[Room]) -> Vec<Room> {
    let mut sorted = rooms.to_vec();
    sorted.sort_by_key(|room| room.center().distance_squared(&Point::ORIGIN));
    sorted
}

/// At each turn, block the two diagonal neighbours of the turn cell so later
/// corridors cannot cut across the corner
pub fn block_turn_corners(grid: &mut PathingGrid, path: &[Point]) {
    for window in path.windows(3) {
        let (prev, cur, next) = (window[0], window[1], window[2]);
        let incoming = (cur.x - prev.x, cur.y - prev.y);
        let outgoing = (next.x - cur.x, next.y - cur.y);
        if incoming == outgoing {
            continue;
        }
        // Outer corner lies ahead along the incoming direction and away
        // from the outgoing one; the inner corner is its mirror
        grid.block_point(cur.offset(incoming.0 - outgoing.0, incoming.1 - outgoing.1));
        grid.block_point(cur.offset(outgoing.0 - incoming.0, outgoing.1 - incoming.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::geometry::RoomShape;
    use crate::world::generation::pathfinding::DEFAULT_SEARCH_LIMIT;

    fn room(x: i32, y: i32, size: i32) -> Room {
        Room::new(Point::new(x, y), size, size, RoomShape::Square)
    }

    #[test]
    fn test_pathing_grid_leaves_doorways() {
        let r = room(5, 5, 3);
        let grid = build_pathing_grid(20, 20, &[r], 1);
        let center = r.center();
        assert_eq!(center, Point::new(6, 6));

        // Corners of the grown footprint are blocked
        assert!(!grid.is_pathable(Point::new(4, 4)));
        assert!(!grid.is_pathable(Point::new(8, 8)));
        assert!(!grid.is_pathable(Point::new(5, 7)));
        // Center row and column stay open through the border ring
        assert!(grid.is_pathable(Point::new(6, 4)));
        assert!(grid.is_pathable(Point::new(4, 6)));
        assert!(grid.is_pathable(Point::new(8, 6)));
        assert!(grid.is_pathable(center));
        // Outside the grown footprint is untouched
        assert!(grid.is_pathable(Point::new(3, 3)));
        // Border
        assert!(!grid.is_pathable(Point::new(0, 10)));
        assert!(!grid.is_pathable(Point::new(19, 10)));
    }

    #[test]
    fn test_chain_order_by_distance_from_origin() {
        let far = room(30, 30, 3);
        let near = room(2, 2, 3);
        let middle = room(15, 2, 3);
        let order = chain_order(&[far, near, middle]);
        assert_eq!(order, vec![near, middle, far]);
    }

    #[test]
    fn test_block_turn_corners() {
        let mut grid = PathingGrid::new(6, 6);
        // East then south, turning at (2, 1)
        let path = [Point::new(1, 1), Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)];
        block_turn_corners(&mut grid, &path);

        assert!(!grid.is_pathable(Point::new(3, 0)), "outer corner");
        assert!(!grid.is_pathable(Point::new(1, 2)), "inner corner");
        assert!(path.iter().all(|p| grid.is_pathable(*p)));
        assert_eq!(grid.blocked_count(), 2);
    }

    #[test]
    fn test_straight_path_blocks_nothing() {
        let mut grid = PathingGrid::new(6, 3);
        let path: Vec<Point> = (0..6).map(|x| Point::new(x, 1)).collect();
        block_turn_corners(&mut grid, &path);
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn test_connect_two_rooms() {
        let rooms = [room(3, 3, 5), room(20, 14, 5)];
        let mut builder = CorridorBuilder::new(32, 24, &rooms, 2, DEFAULT_SEARCH_LIMIT);
        let plan = builder.connect(&rooms);

        assert_eq!(plan.corridors.len(), 1);
        assert!(plan.chain_complete);
        let corridor = &plan.corridors[0];
        assert_eq!(corridor.first(), Some(&plan.rooms[0].center()));
        assert_eq!(corridor.last(), Some(&plan.rooms[1].center()));
    }

    #[test]
    fn test_connect_blocks_corners_between_searches() {
        // Chain order is a, b, c; the a -> b corridor must turn
        let a = room(3, 3, 5);
        let b = room(20, 14, 5);
        let c = room(20, 24, 5);
        let rooms = [c, a, b];
        let fresh = build_pathing_grid(32, 32, &rooms, 2);
        let mut builder = CorridorBuilder::new(32, 32, &rooms, 2, DEFAULT_SEARCH_LIMIT);
        assert_eq!(builder.grid(), &fresh);

        let plan = builder.connect(&rooms);
        assert_eq!(plan.rooms, vec![a, b, c]);
        assert!(plan.chain_complete);

        let first = &plan.corridors[0];
        let mut after_first = fresh.clone();
        block_turn_corners(&mut after_first, first);
        assert!(after_first.blocked_count() > fresh.blocked_count());

        // The second corridor was searched on the grid left by the first
        let second = &plan.corridors[1];
        assert!(second.iter().all(|p| after_first.is_pathable(*p)));

        let mut expected = after_first;
        block_turn_corners(&mut expected, second);
        assert_eq!(builder.grid(), &expected);
    }

    #[test]
    fn test_single_room_chain_is_complete() {
        let rooms = [room(3, 3, 5)];
        let mut builder = CorridorBuilder::new(16, 16, &rooms, 1, DEFAULT_SEARCH_LIMIT);
        let plan = builder.connect(&rooms);
        assert!(plan.corridors.is_empty());
        assert!(plan.chain_complete);
    }

    #[test]
    fn test_unreachable_room_breaks_chain() {
        // A full-height wall at column 12 separates the two rooms
        let rooms = [room(3, 3, 5), room(20, 3, 5)];
        let mut builder = CorridorBuilder::new(32, 16, &rooms, 1, DEFAULT_SEARCH_LIMIT);
        for y in 0..16 {
            builder.grid.block_point(Point::new(12, y));
        }
        let plan = builder.connect(&rooms);
        assert!(plan.corridors.is_empty());
        assert!(!plan.chain_complete);
        assert_eq!(plan.rooms.len(), 2);
    }
}
