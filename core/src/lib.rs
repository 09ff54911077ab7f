#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Forge pipeline.
//!
//! This crate defines the vocabulary that connects the maze world, the pure
//! generation systems and the adapters. The carver produces a maze, the
//! optimizer perturbs copies of it while consulting the solver, and the
//! cleanup pass seals unreachable pockets before an adapter renders the
//! result. All randomness flows through a single [`RandomSource`] handle so a
//! seed fully determines the run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of columns used when no width is configured.
pub const DEFAULT_WIDTH: usize = 50;

/// Number of rows used when no height is configured.
pub const DEFAULT_HEIGHT: usize = 50;

/// Number of guarded toggles applied to each optimizer working copy.
pub const DEFAULT_PERTURBATIONS: usize = 10;

/// Consecutive rejected working copies after which the optimizer gives up.
pub const DEFAULT_MAX_STALLED_ATTEMPTS: usize = 100_000;

/// Axis-aligned steps available between orthogonally adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
    /// Movement toward increasing row indices.
    Down,
}

impl Direction {
    /// Every direction in the order neighbours are visited.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];
}

/// Difficulty triple compared lexicographically by the optimizer.
///
/// Field order matters: the derived [`Ord`] compares `length` first, then
/// `turns`, then `blanks`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PathScore {
    /// Number of steps on the shortest path from start to goal.
    pub length: usize,
    /// Number of direction changes along the shortest path.
    pub turns: usize,
    /// Open cells that are not on the shortest path.
    pub blanks: usize,
}

impl PathScore {
    /// Creates a new score triple.
    #[must_use]
    pub const fn new(length: usize, turns: usize, blanks: usize) -> Self {
        Self {
            length,
            turns,
            blanks,
        }
    }

    /// Reports whether a challenger should replace the incumbent.
    ///
    /// Ties go to the challenger.
    #[must_use]
    pub fn dominates(&self, incumbent: &PathScore) -> bool {
        self >= incumbent
    }
}

/// Uniform integer generator threaded through generation and optimization.
pub trait RandomSource {
    /// Draws a uniformly distributed integer from `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics when `lo > hi`.
    fn uniform_inclusive(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi, "empty random range {lo}..={hi}");
        self.gen_range(lo..=hi)
    }
}

/// Tunables for a single generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Number of columns in the grid.
    pub width: usize,
    /// Number of rows in the grid.
    pub height: usize,
    /// Guarded toggles applied to each working copy before it is solved.
    pub perturbations: usize,
    /// Accepted optimizer iterations to run; `None` means `width * height`.
    pub iterations: Option<usize>,
    /// Consecutive unsolvable or regressing working copies tolerated before
    /// the optimizer stops at its current incumbent.
    pub max_stalled_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            perturbations: DEFAULT_PERTURBATIONS,
            iterations: None,
            max_stalled_attempts: DEFAULT_MAX_STALLED_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    /// Checks that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.perturbations == 0 {
            return Err(ConfigError::ZeroPerturbations);
        }
        if self.max_stalled_attempts == 0 {
            return Err(ConfigError::ZeroStallBudget);
        }
        let _ = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            })?;
        Ok(())
    }

    /// Number of cells in the configured grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Accepted iterations the optimizer must produce before stopping.
    #[must_use]
    pub fn accepted_iterations(&self) -> usize {
        self.iterations.unwrap_or_else(|| self.cell_count())
    }
}

/// Reasons a [`GenerationConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid must contain at least one column.
    #[error("grid width must be at least 1")]
    ZeroWidth,
    /// The grid must contain at least one row.
    #[error("grid height must be at least 1")]
    ZeroHeight,
    /// Every optimizer iteration needs at least one toggle.
    #[error("perturbation count must be at least 1")]
    ZeroPerturbations,
    /// The optimizer needs room for at least one rejected working copy.
    #[error("max stalled attempts must be at least 1")]
    ZeroStallBudget,
    /// The cell count does not fit in memory indices.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
}
