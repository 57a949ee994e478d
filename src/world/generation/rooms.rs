//! Room placer
//!
//! Synthesizes rooms of random size and shape and keeps them apart. A room
//! that collides is moved to the nearest clear spot found by an expanding
//! ring search; when no such spot exists placement stops early.

use crate::rng::DungeonRng;
use crate::world::geometry::{Point, Room, RoomShape};

/// Parameters for one placement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPlacer {
    pub level_width: i32,
    pub level_height: i32,
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
    pub rooms_requested: usize,
    /// Cells kept clear around the level edge
    pub border: i32,
    /// Rooms end up at least twice this far apart
    pub room_border: i32,
    pub allow_overlap: bool,
    pub shapes: Vec<RoomShape>,
}

/// Inclusive range of valid room origins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interior {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl Interior {
    fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl RoomPlacer {
    /// Enabled shapes, falling back to rectangles when none are set
    pub fn enabled_shapes(&self) -> &[RoomShape] {
        if self.shapes.is_empty() {
            &[RoomShape::Rectangle]
        } else {
            &self.shapes
        }
    }

    /// Place up to `rooms_requested` rooms
    pub fn place(&self, rng: &mut DungeonRng) -> Vec<Room> {
        let candidates = (0..self.rooms_requested).map(|_| self.synthesize(rng));
        self.place_candidates(candidates)
    }

    /// Run the placement loop over a sequence of candidates. `None` entries
    /// are skipped; a candidate that cannot be relocated ends the loop and
    /// nothing after it is drawn.
    pub fn place_candidates<I>(&self, candidates: I) -> Vec<Room>
    where
        I: IntoIterator<Item = Option<Room>>,
    {
        let mut rooms: Vec<Room> = Vec::with_capacity(self.rooms_requested);

        for (attempt, candidate) in candidates.into_iter().enumerate() {
            let Some(candidate) = candidate else {
                log::debug!("Room {} has no valid position, skipping", attempt);
                continue;
            };

            if self.allow_overlap || self.clears_all(&candidate, &rooms) {
                rooms.push(candidate);
                continue;
            }

            match self.relocate(&candidate, &rooms) {
                Some(moved) => {
                    log::debug!(
                        "Room {} moved from {:?} to {:?}",
                        attempt,
                        candidate.position(),
                        moved.position()
                    );
                    rooms.push(moved);
                }
                None => {
                    log::warn!(
                        "Could not relocate room {}; stopping at {} of {} rooms",
                        attempt,
                        rooms.len(),
                        self.rooms_requested
                    );
                    break;
                }
            }
        }

        log::debug!("Placed {} of {} rooms", rooms.len(), self.rooms_requested);
        rooms
    }

    /// Draw one room; `None` when it cannot fit inside the border
    pub fn synthesize(&self, rng: &mut DungeonRng) -> Option<Room> {
        let shapes = self.enabled_shapes();
        let shape = *rng.pick(shapes)?;
        let width = rng.next_odd(self.min_width, self.max_width);
        let height = if shape.is_regular() {
            width
        } else {
            rng.next_odd(self.min_height, self.max_height)
        };

        let interior = self.interior(width, height)?;
        let x = rng.next_int(interior.min_x, interior.max_x);
        let y = rng.next_int(interior.min_y, interior.max_y);
        Some(Room::new(Point::new(x, y), width, height, shape))
    }

    /// Search rings of growing radius around the candidate's origin for the
    /// first origin where the same room clears every placed room
    pub fn relocate(&self, candidate: &Room, placed: &[Room]) -> Option<Room> {
        let interior = self.interior(candidate.width(), candidate.height())?;
        let center = candidate.position();

        for radius in 1.. {
            let left = center.x - radius;
            let right = center.x + radius;
            let top = center.y - radius;
            let bottom = center.y + radius;
            if left < interior.min_x
                && right > interior.max_x
                && top < interior.min_y
                && bottom > interior.max_y
            {
                return None;
            }

            for y in top..=bottom {
                let on_edge_row = y == top || y == bottom;
                for x in left..=right {
                    if !on_edge_row && x != left && x != right {
                        continue;
                    }
                    let origin = Point::new(x, y);
                    if !interior.contains(origin) {
                        continue;
                    }
                    let moved = candidate.moved_to(origin);
                    if self.clears_all(&moved, placed) {
                        return Some(moved);
                    }
                }
            }
        }

        None
    }

    fn clears_all(&self, room: &Room, placed: &[Room]) -> bool {
        placed.iter().all(|other| room.clears(other, self.room_border))
    }

    fn interior(&self, width: i32, height: i32) -> Option<Interior> {
        let interior = Interior {
            min_x: self.border,
            max_x: self.level_width - self.border - width,
            min_y: self.border,
            max_y: self.level_height - self.border - height,
        };
        (interior.min_x <= interior.max_x && interior.min_y <= interior.max_y).then_some(interior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placer() -> RoomPlacer {
        RoomPlacer {
            level_width: 64,
            level_height: 64,
            min_width: 5,
            max_width: 9,
            min_height: 3,
            max_height: 11,
            rooms_requested: 10,
            border: 1,
            room_border: 2,
            allow_overlap: false,
            shapes: RoomShape::ALL.to_vec(),
        }
    }

    fn assert_separated(rooms: &[Room], room_border: i32) {
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                assert!(a.clears(b, room_border), "{:?} too close to {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_rooms_are_separated() {
        let placer = placer();
        for seed in 1..20 {
            let rooms = placer.place(&mut DungeonRng::new(seed));
            assert!(!rooms.is_empty());
            assert!(rooms.len() <= placer.rooms_requested);
            assert_separated(&rooms, placer.room_border);
        }
    }

    #[test]
    fn test_rooms_fit_inside_border() {
        let placer = placer();
        let rooms = placer.place(&mut DungeonRng::new(3));
        for room in rooms {
            assert!(room.top_left().x >= placer.border);
            assert!(room.top_left().y >= placer.border);
            assert!(room.bottom_right().x < placer.level_width - placer.border);
            assert!(room.bottom_right().y < placer.level_height - placer.border);
        }
    }

    #[test]
    fn test_sizes_are_odd_and_regular_shapes_square() {
        let placer = placer();
        let mut rng = DungeonRng::new(8);
        for _ in 0..200 {
            let room = placer.synthesize(&mut rng).expect("room fits");
            assert_eq!(room.width() % 2, 1);
            assert_eq!(room.height() % 2, 1);
            assert!((5..=9).contains(&room.width()));
            if room.shape() != RoomShape::Rectangle {
                assert_eq!(room.width(), room.height());
            }
        }
    }

    #[test]
    fn test_empty_shape_set_defaults_to_rectangle() {
        let placer = RoomPlacer { shapes: Vec::new(), ..placer() };
        let mut rng = DungeonRng::new(4);
        for _ in 0..20 {
            let shape = placer.synthesize(&mut rng).map(|r| r.shape());
            assert_eq!(shape, Some(RoomShape::Rectangle));
        }
    }

    #[test]
    fn test_synthesis_fails_when_room_cannot_fit() {
        let placer = RoomPlacer { level_width: 6, level_height: 6, ..placer() };
        let mut rng = DungeonRng::new(1);
        assert!(placer.synthesize(&mut rng).is_none());
        assert!(placer.place(&mut rng).is_empty());
    }

    #[test]
    fn test_relocation_separates_close_pair() {
        let placer = placer();
        let existing = Room::new(Point::new(20, 20), 5, 5, RoomShape::Square);
        // Only `room_border` cells of gap on x, overlapping on y
        let candidate = Room::new(Point::new(27, 20), 5, 5, RoomShape::Square);
        assert!(!candidate.clears(&existing, placer.room_border));

        let moved = placer.relocate(&candidate, &[existing]).expect("space to move into");
        assert!(moved.clears(&existing, placer.room_border));
        assert_eq!(moved.width(), candidate.width());
        assert_eq!(moved.shape(), candidate.shape());
        // The nearest ring that works is two steps out
        let shift = (moved.position().x - 27).abs().max((moved.position().y - 20).abs());
        assert_eq!(shift, 2);
    }

    #[test]
    fn test_relocation_gives_up_when_full() {
        let placer = RoomPlacer { level_width: 20, level_height: 20, ..placer() };
        let blocker = Room::new(Point::new(1, 1), 18, 18, RoomShape::Square);
        let candidate = Room::new(Point::new(5, 5), 5, 5, RoomShape::Square);
        assert!(placer.relocate(&candidate, &[blocker]).is_none());
    }

    #[test]
    fn test_failed_relocation_stops_placement() {
        // On a 12x12 level no second 5x5 room can clear the first, but a
        // 3x3 room in the far corner would
        let placer = RoomPlacer {
            level_width: 12,
            level_height: 12,
            room_border: 1,
            rooms_requested: 3,
            ..placer()
        };
        let first = Room::new(Point::new(1, 1), 5, 5, RoomShape::Square);
        let blocked = Room::new(Point::new(4, 4), 5, 5, RoomShape::Square);
        let would_fit = Room::new(Point::new(8, 8), 3, 3, RoomShape::Square);
        assert!(would_fit.clears(&first, placer.room_border));

        let rooms = placer.place_candidates([Some(first), Some(blocked), Some(would_fit)]);
        assert_eq!(rooms, vec![first]);
    }

    #[test]
    fn test_unplaceable_candidate_is_skipped() {
        let placer = RoomPlacer { rooms_requested: 3, ..placer() };
        let a = Room::new(Point::new(2, 2), 5, 5, RoomShape::Square);
        let b = Room::new(Point::new(40, 40), 5, 5, RoomShape::Square);
        let rooms = placer.place_candidates([Some(a), None, Some(b)]);
        assert_eq!(rooms, vec![a, b]);
    }

    #[test]
    fn test_overlap_mode_keeps_every_room() {
        let placer = RoomPlacer { allow_overlap: true, rooms_requested: 40, ..placer() };
        let rooms = placer.place(&mut DungeonRng::new(2));
        assert_eq!(rooms.len(), 40);
    }

    #[test]
    fn test_same_seed_same_rooms() {
        let placer = placer();
        let a = placer.place(&mut DungeonRng::new(77));
        let b = placer.place(&mut DungeonRng::new(77));
        assert_eq!(a, b);
    }
}
