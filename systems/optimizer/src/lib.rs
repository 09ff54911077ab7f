#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hill climber that perturbs maze copies to lengthen and twist the solution.
//!
//! The optimizer owns exactly one incumbent maze. Each attempt clones it,
//! applies a fixed number of guarded toggles, solves the copy, and promotes
//! the copy when its [`PathScore`] is not lexicographically smaller than the
//! incumbent's. Rejected and unsolvable copies are dropped.

use maze_forge_core::{GenerationConfig, PathScore, RandomSource, DEFAULT_MAX_STALLED_ATTEMPTS};
use maze_forge_system_solver::{score, Solver};
use maze_forge_world::Maze;
use tracing::{debug, warn};

/// Rejection-sampling draws allowed per cell before candidates are enumerated.
const REJECTION_ROUNDS_PER_CELL: usize = 4;

/// Outcome counters of a single optimization run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimizationReport {
    /// Working copies promoted to incumbent.
    pub accepted: usize,
    /// Working copies created.
    pub attempts: usize,
    /// Working copies discarded because the goal became unreachable.
    pub unsolvable: usize,
    /// Score of the final incumbent, if any copy was accepted.
    pub best: Option<PathScore>,
    /// Whether the run stopped early, either because no cell could be
    /// toggled or because the stall budget ran out.
    pub stalled: bool,
}

/// Lexicographic hill climber over `(length, turns, blanks)`.
#[derive(Debug)]
pub struct Optimizer {
    perturbations: usize,
    target_accepted: usize,
    max_stalled_attempts: usize,
    solver: Solver,
}

impl Optimizer {
    /// Creates an optimizer applying `perturbations` toggles per attempt and
    /// stopping after `target_accepted` promotions.
    #[must_use]
    pub fn new(perturbations: usize, target_accepted: usize) -> Self {
        Self {
            perturbations,
            target_accepted,
            max_stalled_attempts: DEFAULT_MAX_STALLED_ATTEMPTS,
            solver: Solver::new(),
        }
    }

    /// Creates an optimizer from a validated configuration.
    #[must_use]
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.perturbations, config.accepted_iterations())
            .with_max_stalled_attempts(config.max_stalled_attempts)
    }

    /// Stops the run once this many consecutive working copies were
    /// unsolvable or scored below the incumbent.
    #[must_use]
    pub fn with_max_stalled_attempts(mut self, max_stalled_attempts: usize) -> Self {
        self.max_stalled_attempts = max_stalled_attempts;
        self
    }

    /// Toggles applied to each working copy.
    #[must_use]
    pub const fn perturbations(&self) -> usize {
        self.perturbations
    }

    /// Promotions required before the run ends.
    #[must_use]
    pub const fn target_accepted(&self) -> usize {
        self.target_accepted
    }

    /// Consecutive rejected working copies tolerated before giving up.
    #[must_use]
    pub const fn max_stalled_attempts(&self) -> usize {
        self.max_stalled_attempts
    }

    /// Runs the hill climber and returns the final incumbent.
    pub fn optimize<R>(&mut self, maze: Maze, rng: &mut R) -> (Maze, OptimizationReport)
    where
        R: RandomSource + ?Sized,
    {
        self.optimize_with(maze, rng, |_, _| {})
    }

    /// Runs the hill climber, invoking `on_accept` after every promotion.
    pub fn optimize_with<R, F>(
        &mut self,
        maze: Maze,
        rng: &mut R,
        mut on_accept: F,
    ) -> (Maze, OptimizationReport)
    where
        R: RandomSource + ?Sized,
        F: FnMut(&Maze, PathScore),
    {
        let mut best = maze;
        let mut report = OptimizationReport::default();
        let mut rejected_in_a_row = 0;

        while report.accepted < self.target_accepted {
            if rejected_in_a_row >= self.max_stalled_attempts {
                warn!(
                    accepted = report.accepted,
                    rejected_in_a_row = rejected_in_a_row,
                    "incumbent cannot be matched; stopping early"
                );
                report.stalled = true;
                break;
            }

            report.attempts += 1;
            let mut candidate = best.clone();

            for _ in 0..self.perturbations {
                if !perturb(&mut candidate, rng) {
                    warn!(
                        accepted = report.accepted,
                        "no toggleable cell left; stopping early"
                    );
                    report.stalled = true;
                    return (best, report);
                }
            }

            if self.solver.solve(&mut candidate).is_none() {
                report.unsolvable += 1;
                rejected_in_a_row += 1;
                continue;
            }
            let promoted_score = score(&candidate).filter(|candidate_score| {
                report
                    .best
                    .map_or(true, |incumbent| candidate_score.dominates(&incumbent))
            });
            let Some(candidate_score) = promoted_score else {
                rejected_in_a_row += 1;
                continue;
            };
            rejected_in_a_row = 0;

            assert!(
                candidate.same_frame_as(&best),
                "working copy changed shape during perturbation"
            );
            best = candidate;
            report.best = Some(candidate_score);
            report.accepted += 1;
            debug!(
                accepted = report.accepted,
                attempts = report.attempts,
                length = candidate_score.length,
                turns = candidate_score.turns,
                blanks = candidate_score.blanks,
                "promoted working copy"
            );
            on_accept(&best, candidate_score);
        }

        (best, report)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

/// Clears solve state and flips one cell that is neither start nor goal and
/// passes the topology guard.
///
/// Positions are drawn uniformly over the whole grid and rejected until one
/// qualifies. After `4 * size` rejected draws the qualifying cells are
/// enumerated and one is picked uniformly. Returns `false` when no cell
/// qualifies.
pub fn perturb<R>(maze: &mut Maze, rng: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    maze.clear_solve_state();

    let last = maze.size() - 1;
    let draws = maze.size().saturating_mul(REJECTION_ROUNDS_PER_CELL);
    for _ in 0..draws {
        let pos = rng.uniform_inclusive(0, last);
        if is_toggle_candidate(maze, pos) {
            maze.toggle(pos);
            return true;
        }
    }

    let candidates: Vec<usize> = (0..maze.size())
        .filter(|&pos| is_toggle_candidate(maze, pos))
        .collect();
    if candidates.is_empty() {
        return false;
    }

    let pos = candidates[rng.uniform_inclusive(0, candidates.len() - 1)];
    maze.toggle(pos);
    true
}

fn is_toggle_candidate(maze: &Maze, pos: usize) -> bool {
    pos != maze.start() && pos != maze.goal() && maze.can_toggle(pos)
}
