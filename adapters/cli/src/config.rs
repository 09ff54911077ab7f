use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use maze_forge_core::GenerationConfig;
use tracing::Level;

/// Command-line arguments accepted by the Maze Forge binary.
#[derive(Debug, Parser)]
#[command(
    name = "maze-forge",
    version,
    about = "Generates a single-solution maze and optimizes it for a long, twisting shortest path."
)]
pub(crate) struct CliArgs {
    /// TOML file providing defaults for the generation settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of columns in the grid.
    #[arg(long)]
    width: Option<usize>,
    /// Number of rows in the grid.
    #[arg(long)]
    height: Option<usize>,
    /// Guarded toggles applied to each optimizer working copy.
    #[arg(long)]
    perturbations: Option<usize>,
    /// Accepted optimizer iterations (defaults to width * height).
    #[arg(long)]
    iterations: Option<usize>,
    /// Consecutive rejected working copies tolerated before the optimizer
    /// keeps its current best and stops.
    #[arg(long, value_name = "COUNT")]
    max_stalled_attempts: Option<usize>,
    /// Seed for the random source; drawn from the OS when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Raises log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl CliArgs {
    /// Log level selected by the verbosity flags.
    pub(crate) fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Merges the optional config file with command-line overrides.
    pub(crate) fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => GenerationConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(perturbations) = self.perturbations {
            config.perturbations = perturbations;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = Some(iterations);
        }
        if let Some(max_stalled_attempts) = self.max_stalled_attempts {
            config.max_stalled_attempts = max_stalled_attempts;
        }

        config.validate().context("invalid generation settings")?;
        Ok(config)
    }
}
