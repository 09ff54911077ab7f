#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Textual rendering of finished mazes.
//!
//! Output is row-major with one grid row per line and cells separated by
//! commas. The start and goal take precedence over path markers, which take
//! precedence over walls.

use std::io::Write;

use anyhow::{Context, Result as AnyResult};
use maze_forge_world::Maze;

/// Separator placed between cells of a row.
pub const CELL_SEPARATOR: char = ',';

/// Presentation class of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The fixed start cell.
    Start,
    /// The goal cell.
    Goal,
    /// A cell on the current shortest path.
    Path,
    /// Any other impassable cell.
    Wall,
    /// Any other open cell.
    Blank,
}

impl Glyph {
    /// Classifies the cell at `pos`.
    #[must_use]
    pub fn of(maze: &Maze, pos: usize) -> Self {
        let cell = maze.cell(pos);
        if pos == maze.start() {
            Self::Start
        } else if pos == maze.goal() {
            Self::Goal
        } else if cell.is_on_shortest_path() {
            Self::Path
        } else if cell.is_wall() {
            Self::Wall
        } else {
            Self::Blank
        }
    }

    /// Character written for the glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Path => '2',
            Self::Wall => '1',
            Self::Blank => ' ',
        }
    }
}

/// Writes the maze to `out`, one row per line.
pub fn render<W: Write + ?Sized>(maze: &Maze, out: &mut W) -> AnyResult<()> {
    for row in 0..maze.height() {
        let line = render_row(maze, row);
        writeln!(out, "{line}").with_context(|| format!("failed to write maze row {row}"))?;
    }
    out.flush().context("failed to flush rendered maze")
}

/// Renders the whole maze into a string.
#[must_use]
pub fn render_to_string(maze: &Maze) -> String {
    let mut text = String::with_capacity(maze.size() * 2);
    for row in 0..maze.height() {
        text.push_str(&render_row(maze, row));
        text.push('\n');
    }
    text
}

fn render_row(maze: &Maze, row: usize) -> String {
    let width = maze.width();
    let mut line = String::with_capacity(width * 2);
    for column in 0..width {
        if column > 0 {
            line.push(CELL_SEPARATOR);
        }
        line.push(Glyph::of(maze, row * width + column).symbol());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_forge_system_solver::Solver;

    #[test]
    fn unsolved_maze_renders_walls_and_blanks() {
        let maze = Maze::from_layout(&["S.#", "#.G"]).expect("layout parses");

        assert_eq!(render_to_string(&maze), "S, ,1\n1, ,G\n");
    }

    #[test]
    fn solved_maze_marks_the_path() {
        let mut maze = Maze::from_layout(&[
            "S..", //
            "#.#", //
            "#.G",
        ])
        .expect("layout parses");
        let _ = Solver::new().solve(&mut maze).expect("solvable");

        let text = render_to_string(&maze);

        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|line| line.split(',').count() == 3));
        assert_eq!(Glyph::of(&maze, 0), Glyph::Start);
        assert_eq!(Glyph::of(&maze, 8), Glyph::Goal);
        assert_eq!(Glyph::of(&maze, 3), Glyph::Wall);
        assert_eq!(
            (1..8).filter(|&pos| Glyph::of(&maze, pos) == Glyph::Path).count(),
            3,
            "three intermediate cells lie on a length-four path"
        );
    }

    #[test]
    fn render_matches_render_to_string() {
        let maze = Maze::from_layout(&["S.G"]).expect("layout parses");
        let mut buffer = Vec::new();

        render(&maze, &mut buffer).expect("writing to a vec succeeds");

        assert_eq!(String::from_utf8(buffer).expect("utf8"), render_to_string(&maze));
    }
}
