//! Construction of mazes from textual layouts.
//!
//! Layouts list one row per string using `#` for walls, `.` for open cells,
//! `S` for the start and `G` for the goal. The goal defaults to the start
//! when no `G` is present.

use thiserror::Error;

use crate::Maze;

/// Reasons a textual layout cannot be turned into a [`Maze`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout contained no rows or an empty first row.
    #[error("layout has no cells")]
    Empty,
    /// A row had a different width from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character other than `#`, `.`, `S` or `G` appeared.
    #[error("unknown symbol '{symbol}' at column {column}, row {row}")]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// Zero-based column of the character.
        column: usize,
        /// Zero-based row of the character.
        row: usize,
    },
    /// No `S` marker was present.
    #[error("layout has no start marker")]
    MissingStart,
    /// A marker that must be unique appeared more than once.
    #[error("marker '{0}' appears more than once")]
    DuplicateMarker(char),
}

impl Maze {
    /// Parses a maze from rows of `#`, `.`, `S` and `G` characters.
    pub fn from_layout(rows: &[&str]) -> Result<Self, LayoutError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut open = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, symbol) in line.chars().enumerate() {
                let pos = row * width + column;
                match symbol {
                    '#' => open.push(false),
                    '.' => open.push(true),
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateMarker('S'));
                        }
                        open.push(true);
                    }
                    'G' => {
                        if goal.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateMarker('G'));
                        }
                        open.push(true);
                    }
                    other => {
                        return Err(LayoutError::UnknownSymbol {
                            symbol: other,
                            column,
                            row,
                        })
                    }
                }
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        let mut maze = Maze::new(width, rows.len(), start);
        for (pos, is_open) in open.into_iter().enumerate() {
            maze.set_wall(pos, !is_open);
        }
        maze.set_goal(goal.unwrap_or(start));
        Ok(maze)
    }
}
