#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Breadth-first solver that measures the shortest path of a maze.

use std::collections::VecDeque;

use maze_forge_core::{Direction, PathScore};
use maze_forge_world::{Maze, PathSummary};
use tracing::trace;

/// Reusable breadth-first search workspace.
///
/// Every call to [`Solver::solve`] clears the maze's transient state first,
/// so repeated solves of the same snapshot produce identical results.
#[derive(Debug, Default)]
pub struct Solver {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl Solver {
    /// Creates a solver with empty buffers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: Vec::new(),
        }
    }

    /// Runs the search from the start and marks the shortest path to the goal.
    ///
    /// Returns `None` when the goal is unreachable; the maze then carries
    /// distances for the reachable region but no path markers.
    pub fn solve(&mut self, maze: &mut Maze) -> Option<PathSummary> {
        maze.clear_solve_state();
        self.search(maze);

        let start = maze.start();
        let goal = maze.goal();
        if goal != start && maze.cell(goal).predecessor().is_none() {
            trace!(start, goal, "goal unreachable");
            return None;
        }

        let summary = trace_path(maze);
        maze.set_solution(summary);
        Some(summary)
    }

    fn search(&mut self, maze: &mut Maze) {
        let start = maze.start();

        self.queue.clear();
        self.queued.clear();
        self.queued.resize(maze.size(), false);

        self.queue.push_back(start);
        self.queued[start] = true;

        while let Some(pos) = self.queue.pop_front() {
            self.queued[pos] = false;
            maze.mark_visited(pos);

            if maze.is_wall(pos) {
                continue;
            }
            let Some(distance) = maze.cell(pos).distance_from_start() else {
                continue;
            };
            let cost = distance + 1;

            for direction in Direction::ALL {
                let Some(next) = maze.neighbor_index(pos, direction) else {
                    continue;
                };
                if maze.is_wall(next) {
                    continue;
                }

                let improved = maze
                    .cell(next)
                    .distance_from_start()
                    .map_or(true, |known| cost < known);
                if !improved {
                    continue;
                }

                maze.record_distance(next, cost, pos);
                if !self.queued[next] {
                    self.queued[next] = true;
                    self.queue.push_back(next);
                }
            }
        }
    }
}

/// Walks predecessor links from the goal back to the start.
///
/// Marks the goal and every intermediate cell; the start itself is not
/// marked. A turn is counted whenever the displacement of a hop differs from
/// the displacement of the hop before it.
fn trace_path(maze: &mut Maze) -> PathSummary {
    let start = maze.start();
    let mut pos = maze.goal();
    let mut summary = PathSummary::default();
    let mut previous_step = None;

    while pos != start {
        maze.mark_on_shortest_path(pos);
        summary.length += 1;
        assert!(
            summary.length <= maze.size(),
            "predecessor chain from goal does not terminate"
        );

        let from = maze
            .cell(pos)
            .predecessor()
            .expect("cells reached by the search record a predecessor");
        let step = displacement(from, pos);
        if previous_step.is_some_and(|previous| previous != step) {
            summary.turns += 1;
        }
        previous_step = Some(step);
        pos = from;
    }

    summary
}

fn displacement(from: usize, to: usize) -> (bool, usize) {
    if to >= from {
        (true, to - from)
    } else {
        (false, from - to)
    }
}

/// Counts open cells that are not marked as on the shortest path.
#[must_use]
pub fn count_open_non_path_cells(maze: &Maze) -> usize {
    maze.cells()
        .iter()
        .filter(|cell| cell.is_open() && !cell.is_on_shortest_path())
        .count()
}

/// Difficulty triple of a solved maze, or `None` if it has no recorded path.
#[must_use]
pub fn score(maze: &Maze) -> Option<PathScore> {
    maze.solution().map(|summary| {
        PathScore::new(summary.length, summary.turns, count_open_non_path_cells(maze))
    })
}
