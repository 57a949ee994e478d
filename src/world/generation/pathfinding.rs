//! Bounded A* over a pathable/blocked grid
//!
//! One [`GridPathfinder`] is reused for every corridor query of a level.
//! It owns only its search-node state; the [`PathingGrid`] is passed in
//! per call so the corridor builder can keep mutating it between searches.

use crate::world::geometry::Point;

/// Nodes a single search may close before giving up
pub const DEFAULT_SEARCH_LIMIT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passability {
    Pathable,
    Blocked,
}

/// Corridor-search classification of each cell, separate from the tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathingGrid {
    width: i32,
    height: i32,
    cells: Vec<Passability>,
}

impl PathingGrid {
    /// Create an all-pathable grid
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0, "grid size must not be negative");
        Self {
            width,
            height,
            cells: vec![Passability::Pathable; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Out-of-bounds cells are never pathable
    pub fn is_pathable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells[self.idx(p)] == Passability::Pathable
    }

    /// Mark a cell blocked; ignored outside the grid
    pub fn block_point(&mut self, p: Point) {
        if self.in_bounds(p) {
            let idx = self.idx(p);
            self.cells[idx] = Passability::Blocked;
        }
    }

    /// Block the outermost ring of cells
    pub fn block_border(&mut self) {
        for x in 0..self.width {
            self.block_point(Point::new(x, 0));
            self.block_point(Point::new(x, self.height - 1));
        }
        for y in 0..self.height {
            self.block_point(Point::new(0, y));
            self.block_point(Point::new(self.width - 1, y));
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Passability::Blocked).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum NodeStatus {
    #[default]
    Undefined,
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, Default)]
struct SearchNode {
    g: u32,
    h: u32,
    f: u32,
    parent: Option<Point>,
    status: NodeStatus,
}

/// Reusable bounded A* search
#[derive(Debug, Clone)]
pub struct GridPathfinder {
    width: i32,
    height: i32,
    nodes: Vec<SearchNode>,
    open: Vec<Point>,
    search_limit: usize,
}

impl GridPathfinder {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_search_limit(width, height, DEFAULT_SEARCH_LIMIT)
    }

    pub fn with_search_limit(width: i32, height: i32, search_limit: usize) -> Self {
        assert!(width >= 0 && height >= 0, "grid size must not be negative");
        Self {
            width,
            height,
            nodes: vec![SearchNode::default(); (width * height) as usize],
            open: Vec::new(),
            search_limit,
        }
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Clear every node and the open list. O(grid size).
    pub fn reset(&mut self) {
        self.nodes.fill(SearchNode::default());
        self.open.clear();
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Shortest 4-directional path from `start` to `goal`, both inclusive.
    ///
    /// Returns an empty path when no route exists or when more than the
    /// search limit of nodes were visited; the two cases look the same.
    pub fn find_path(&mut self, grid: &PathingGrid, start: Point, goal: Point) -> Vec<Point> {
        assert!(
            grid.width() == self.width && grid.height() == self.height,
            "pathing grid is {}x{} but pathfinder is {}x{}",
            grid.width(),
            grid.height(),
            self.width,
            self.height
        );
        assert!(grid.in_bounds(start), "start {:?} outside pathing grid", start);
        assert!(grid.in_bounds(goal), "goal {:?} outside pathing grid", goal);

        self.reset();

        let h = start.manhattan(&goal) as u32;
        let start_idx = self.idx(start);
        self.nodes[start_idx] = SearchNode {
            g: 0,
            h,
            f: h,
            parent: None,
            status: NodeStatus::Open,
        };
        self.open.push(start);

        let mut visited = 0usize;
        while let Some(current) = self.pop_lowest_f() {
            let current_idx = self.idx(current);
            self.nodes[current_idx].status = NodeStatus::Closed;

            if current == goal {
                return self.reconstruct(start, goal);
            }

            visited += 1;
            if visited > self.search_limit {
                log::trace!(
                    "Search {:?} -> {:?} hit limit of {} nodes",
                    start,
                    goal,
                    self.search_limit
                );
                return Vec::new();
            }

            let g = self.nodes[current_idx].g + 1;
            for neighbor in current.cardinal_neighbors() {
                if !grid.is_pathable(neighbor) {
                    continue;
                }
                let neighbor_idx = self.idx(neighbor);
                let node = &mut self.nodes[neighbor_idx];
                match node.status {
                    NodeStatus::Closed => continue,
                    NodeStatus::Open if g >= node.g => continue,
                    NodeStatus::Open => {
                        node.g = g;
                        node.f = g + node.h;
                        node.parent = Some(current);
                    }
                    NodeStatus::Undefined => {
                        let h = neighbor.manhattan(&goal) as u32;
                        *node = SearchNode {
                            g,
                            h,
                            f: g + h,
                            parent: Some(current),
                            status: NodeStatus::Open,
                        };
                        self.open.push(neighbor);
                    }
                }
            }
        }

        Vec::new()
    }

    /// Remove the open node with the smallest f; earliest inserted wins ties
    fn pop_lowest_f(&mut self) -> Option<Point> {
        let mut best: Option<(usize, u32)> = None;
        for (i, p) in self.open.iter().enumerate() {
            let f = self.nodes[self.idx(*p)].f;
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((i, f));
            }
        }
        best.map(|(i, _)| self.open.remove(i))
    }

    fn reconstruct(&self, start: Point, goal: Point) -> Vec<Point> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            match self.nodes[self.idx(current)].parent {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}
