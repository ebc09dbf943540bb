//! Command-line interface for generating overworld tile maps

use crate::algorithm::generator::{AttemptOutcome, Generator, GeneratorConfig};
use crate::domain::overworld;
use crate::io::configuration::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SEED,
};
use crate::io::error::{GenerationError, Result};
use crate::io::output::{export_tile_grid, write_tile_grid};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavemap")]
#[command(
    author,
    version,
    about = "Generate tile maps by wave function collapse"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Output file for the tile-index grid (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Map width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAP_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum collapse iterations within a single attempt
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Maximum attempts before giving up (0 retries forever)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Skip the water-body anchor seed at the map center
    #[arg(short = 'n', long)]
    pub no_seed: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Attempt cap as the generator expects it; 0 means unbounded
    pub const fn max_attempts(&self) -> Option<usize> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.attempts)
        }
    }
}

/// Orchestrates a generation run from parsed arguments
pub struct MapRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl MapRunner {
    /// Create a runner with progress display per the CLI flags
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressReporter::new(cli.quiet);
        Self { cli, progress }
    }

    /// Generate a map and write the projected tile grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, every allowed
    /// attempt is discarded, or the output cannot be written
    pub fn run(&mut self) -> Result<()> {
        let domain = overworld::domain()?;

        let mut config = GeneratorConfig::new(self.cli.width, self.cli.height);
        config.max_iterations = self.cli.iterations;
        config.max_attempts = self.cli.max_attempts();
        if !self.cli.no_seed {
            config.seeds = overworld::center_seed(self.cli.width, self.cli.height);
        }

        let mut generator = Generator::new(domain, config, self.cli.seed)?;

        let mut attempt = 0;
        let mut contradictions = 0;
        let mut exhaustions = 0;
        let collapsed = loop {
            if let Some(cap) = self.cli.max_attempts() {
                if attempt >= cap {
                    return Err(GenerationError::AttemptsExhausted {
                        attempts: attempt,
                        contradictions,
                        exhaustions,
                    });
                }
            }
            attempt += 1;
            self.progress.attempt_started(attempt);

            match generator.execute_attempt() {
                AttemptOutcome::Converged(grid) => break grid,
                AttemptOutcome::Contradicted(contradiction) => {
                    contradictions += 1;
                    self.progress
                        .attempt_discarded(attempt, &contradiction.to_string());
                }
                AttemptOutcome::Exhausted { iterations } => {
                    exhaustions += 1;
                    self.progress.attempt_discarded(
                        attempt,
                        &format!("iteration limit after {iterations} iterations"),
                    );
                }
            }
        };

        self.progress.finish(attempt, collapsed.iterations);

        let tiles = generator.project(&collapsed);
        match &self.cli.output {
            Some(path) => export_tile_grid(&tiles, path),
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                write_tile_grid(&tiles, &mut writer)?;
                writer.flush().map_err(|e| GenerationError::FileSystem {
                    path: "<stdout>".into(),
                    operation: "flush output",
                    source: e,
                })
            }
        }
    }
}
