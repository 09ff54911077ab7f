#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Dead-space fill that seals every open pocket unreachable from the start.

use maze_forge_world::Maze;
use tracing::debug;

/// Open cells reachable from the start through orthogonal open steps.
///
/// Uses an explicit stack so grid size never limits call depth.
#[must_use]
pub fn reachable_from_start(maze: &Maze) -> Vec<bool> {
    let mut reached = vec![false; maze.size()];
    let start = maze.start();
    if maze.is_wall(start) {
        return reached;
    }

    let mut stack = vec![start];
    reached[start] = true;

    while let Some(pos) = stack.pop() {
        for next in maze.neighbors(pos) {
            if reached[next] || maze.is_wall(next) {
                continue;
            }
            reached[next] = true;
            stack.push(next);
        }
    }

    reached
}

/// Walls off every open cell the start cannot reach.
///
/// Returns the number of cells converted. A second call on the same maze
/// converts nothing.
pub fn fill_dead_space(maze: &mut Maze) -> usize {
    let reached = reachable_from_start(maze);
    let mut sealed = 0;

    for (pos, reached) in reached.into_iter().enumerate() {
        if !reached && maze.is_open(pos) {
            maze.set_wall(pos, true);
            sealed += 1;
        }
    }

    debug!(sealed, "filled dead space");
    sealed
}
