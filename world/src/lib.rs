#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative maze state for Maze Forge.
//!
//! A [`Maze`] is a fixed-size, row-major array of [`Cell`] values together
//! with the start and goal indices. Systems query the grid through the pure
//! adjacency helpers, flip walls only after consulting
//! [`Maze::can_toggle`], and store breadth-first search results in the
//! per-cell transient state.

mod layout;
mod topology;

use maze_forge_core::Direction;

pub use layout::LayoutError;

/// State of a single grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    wall: bool,
    on_shortest_path: bool,
    distance: Option<usize>,
    predecessor: Option<usize>,
    visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            wall: true,
            on_shortest_path: false,
            distance: None,
            predecessor: None,
            visited: false,
        }
    }
}

impl Cell {
    /// Whether the cell is impassable.
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the cell is passable.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.wall
    }

    /// Whether the most recent solve placed the cell on the shortest path.
    #[must_use]
    pub const fn is_on_shortest_path(&self) -> bool {
        self.on_shortest_path
    }

    /// Breadth-first distance from the start, if the cell was reached.
    #[must_use]
    pub const fn distance_from_start(&self) -> Option<usize> {
        self.distance
    }

    /// Cell the search arrived from, if any.
    #[must_use]
    pub const fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    /// Whether the most recent solve dequeued the cell.
    #[must_use]
    pub const fn visited_in_bfs(&self) -> bool {
        self.visited
    }

    fn clear_transient(&mut self) {
        self.on_shortest_path = false;
        self.distance = None;
        self.predecessor = None;
        self.visited = false;
    }
}

/// Length and turn count of the shortest path found by the last solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathSummary {
    /// Number of steps from start to goal.
    pub length: usize,
    /// Number of direction changes along the path.
    pub turns: usize,
}

/// Rectangular maze with a fixed start and a carved goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    start: usize,
    goal: usize,
    cells: Vec<Cell>,
    solution: Option<PathSummary>,
}

impl Maze {
    /// Creates an all-wall maze.
    ///
    /// The goal coincides with the start until a carver assigns one.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero, the cell count overflows or
    /// `start` lies outside the grid.
    #[must_use]
    pub fn new(width: usize, height: usize, start: usize) -> Self {
        assert!(width > 0 && height > 0, "maze dimensions must be non-zero");
        let size = width
            .checked_mul(height)
            .expect("maze cell count overflows usize");
        assert!(start < size, "start {start} outside {width}x{height} grid");

        let mut maze = Self {
            width,
            height,
            start,
            goal: start,
            cells: vec![Cell::default(); size],
            solution: None,
        };
        maze.clear_solve_state();
        maze
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Index of the start cell.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Index of the goal cell.
    #[must_use]
    pub const fn goal(&self) -> usize {
        self.goal
    }

    /// Dense cell storage in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell stored at `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` lies outside the grid.
    #[must_use]
    pub fn cell(&self, pos: usize) -> &Cell {
        &self.cells[pos]
    }

    /// Whether the cell at `pos` is impassable.
    #[must_use]
    pub fn is_wall(&self, pos: usize) -> bool {
        self.cells[pos].wall
    }

    /// Whether the cell at `pos` is passable.
    #[must_use]
    pub fn is_open(&self, pos: usize) -> bool {
        !self.cells[pos].wall
    }

    /// Whether both mazes share dimensions and start.
    #[must_use]
    pub fn same_frame_as(&self, other: &Maze) -> bool {
        self.width == other.width && self.height == other.height && self.start == other.start
    }

    /// Index of the orthogonal neighbour of `pos`, if it lies inside the grid.
    #[must_use]
    pub fn neighbor_index(&self, pos: usize, direction: Direction) -> Option<usize> {
        if pos >= self.size() {
            return None;
        }
        let column = pos % self.width;
        match direction {
            Direction::Up => pos.checked_sub(self.width),
            Direction::Left => (column > 0).then(|| pos - 1),
            Direction::Right => (column + 1 < self.width).then(|| pos + 1),
            Direction::Down => {
                let below = pos + self.width;
                (below < self.size()).then_some(below)
            }
        }
    }

    /// In-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor_index(pos, direction))
    }

    /// Whether `from` and `to` are both open and orthogonally adjacent.
    #[must_use]
    pub fn is_edge(&self, from: usize, to: usize) -> bool {
        if from >= self.size() || to >= self.size() {
            return false;
        }
        self.is_open(from) && self.is_open(to) && self.neighbors(from).any(|next| next == to)
    }

    /// Counts walled orthogonal neighbours, treating the grid border as wall.
    #[must_use]
    pub fn walled_neighbor_count(&self, pos: usize) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.neighbor_index(pos, direction)
                    .map_or(true, |next| self.is_wall(next))
            })
            .count()
    }

    /// Number of passable cells.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    /// Whether flipping `pos` keeps every 2x2 block free of corner-only
    /// passages and sealed single-cell pockets.
    #[must_use]
    pub fn can_toggle(&self, pos: usize) -> bool {
        topology::can_toggle(self, pos)
    }

    /// Shortest path recorded by the last successful solve.
    #[must_use]
    pub const fn solution(&self) -> Option<PathSummary> {
        self.solution
    }

    /// Sets the wall state of `pos`.
    pub fn set_wall(&mut self, pos: usize, wall: bool) {
        self.cells[pos].wall = wall;
    }

    /// Flips the wall state of `pos`.
    pub fn toggle(&mut self, pos: usize) {
        let cell = &mut self.cells[pos];
        cell.wall = !cell.wall;
    }

    /// Assigns the goal cell.
    ///
    /// # Panics
    ///
    /// Panics when `goal` lies outside the grid.
    pub fn set_goal(&mut self, goal: usize) {
        assert!(goal < self.size(), "goal {goal} outside grid");
        self.goal = goal;
    }

    /// Forgets every search result, leaving only the start at distance zero.
    pub fn clear_solve_state(&mut self) {
        for cell in &mut self.cells {
            cell.clear_transient();
        }
        self.cells[self.start].distance = Some(0);
        self.solution = None;
    }

    /// Records a relaxed distance for `pos`.
    pub fn record_distance(&mut self, pos: usize, distance: usize, predecessor: usize) {
        let cell = &mut self.cells[pos];
        cell.distance = Some(distance);
        cell.predecessor = Some(predecessor);
    }

    /// Marks `pos` as dequeued by the search.
    pub fn mark_visited(&mut self, pos: usize) {
        self.cells[pos].visited = true;
    }

    /// Marks `pos` as part of the shortest path.
    pub fn mark_on_shortest_path(&mut self, pos: usize) {
        self.cells[pos].on_shortest_path = true;
    }

    /// Stores the summary of a successful solve.
    pub fn set_solution(&mut self, summary: PathSummary) {
        self.solution = Some(summary);
    }
}
