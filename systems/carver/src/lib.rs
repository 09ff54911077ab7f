#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Growing-tree carver that turns an all-wall grid into a corridor maze.

use maze_forge_core::RandomSource;
use maze_forge_world::Maze;
use tracing::debug;

/// Minimum number of walled orthogonal neighbours a cell needs before it may
/// be opened. Keeps corridors one cell wide and free of loops.
const MIN_WALLED_NEIGHBORS: usize = 3;

/// Randomised frontier carver.
///
/// The frontier is a multiset: positions may be pushed several times and
/// become stale once opened. Each entry is consumed independently.
#[derive(Debug, Default)]
pub struct Carver {
    frontier: Vec<usize>,
}

impl Carver {
    /// Creates a carver with an empty frontier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frontier: Vec::new(),
        }
    }

    /// Carves a maze whose start is drawn uniformly over the whole grid.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    pub fn carve<R>(&mut self, width: usize, height: usize, rng: &mut R) -> Maze
    where
        R: RandomSource + ?Sized,
    {
        let size = width
            .checked_mul(height)
            .filter(|&size| size > 0)
            .expect("maze dimensions must be non-zero");
        let start = rng.uniform_inclusive(0, size - 1);
        self.carve_from(width, height, start, rng)
    }

    /// Carves a maze from a caller-chosen start.
    ///
    /// The goal becomes whichever cell was opened last.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero or `start` lies outside the grid.
    pub fn carve_from<R>(&mut self, width: usize, height: usize, start: usize, rng: &mut R) -> Maze
    where
        R: RandomSource + ?Sized,
    {
        let mut maze = Maze::new(width, height, start);
        let mut goal = start;

        self.frontier.clear();
        self.frontier.push(start);

        while !self.frontier.is_empty() {
            let picked = rng.uniform_inclusive(0, self.frontier.len() - 1);
            let pos = self.frontier.swap_remove(picked);

            if !maze.is_wall(pos) || !maze.can_toggle(pos) {
                continue;
            }
            if maze.walled_neighbor_count(pos) < MIN_WALLED_NEIGHBORS {
                continue;
            }

            maze.set_wall(pos, false);
            goal = pos;
            self.frontier.extend(maze.neighbors(pos));
        }

        maze.set_goal(goal);
        debug!(
            width,
            height,
            start,
            goal,
            open_cells = maze.open_cell_count(),
            "carved maze"
        );
        maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_cell_grid_opens_start_as_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let maze = Carver::new().carve(1, 1, &mut rng);

        assert_eq!(maze.start(), 0);
        assert_eq!(maze.goal(), 0);
        assert!(maze.is_open(0));
    }

    #[test]
    fn start_is_always_opened() {
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let maze = Carver::new().carve(7, 5, &mut rng);
            assert!(maze.is_open(maze.start()), "seed {seed}");
            assert!(maze.is_open(maze.goal()), "seed {seed}");
        }
    }

    #[test]
    fn frontier_is_drained_after_carving() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut carver = Carver::new();
        let _ = carver.carve(6, 6, &mut rng);
        assert!(carver.frontier.is_empty());
    }
}
