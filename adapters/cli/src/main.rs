#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates, optimizes and prints a maze.

mod config;

use std::io;

use anyhow::Result;
use clap::Parser;
use maze_forge_core::GenerationConfig;
use maze_forge_rendering::render;
use maze_forge_system_carver::Carver;
use maze_forge_system_cleanup::fill_dead_space;
use maze_forge_system_optimizer::Optimizer;
use maze_forge_system_solver::Solver;
use maze_forge_world::Maze;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::CliArgs;

/// Entry point for the Maze Forge command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level())
        .with_target(false)
        .init();

    let config = args.generation_config()?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        seed,
        width = config.width,
        height = config.height,
        perturbations = config.perturbations,
        iterations = config.accepted_iterations(),
        "generating maze"
    );

    let maze = generate(&config, seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&maze, &mut out)
}

/// Runs carve, optimize and cleanup with a generator seeded from `seed`.
fn generate(config: &GenerationConfig, seed: u64) -> Maze {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let maze = Carver::new().carve(config.width, config.height, &mut rng);
    let (mut maze, report) = Optimizer::from_config(config).optimize(maze, &mut rng);
    info!(
        accepted = report.accepted,
        attempts = report.attempts,
        unsolvable = report.unsolvable,
        stalled = report.stalled,
        "optimization finished"
    );

    if maze.solution().is_none() {
        let _ = Solver::new().solve(&mut maze);
    }
    let sealed = fill_dead_space(&mut maze);
    info!(sealed, open_cells = maze.open_cell_count(), "maze ready");
    maze
}
