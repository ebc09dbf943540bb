//! Collapse driver running the attempt loop
//!
//! One attempt owns one fresh grid: seed, then repeatedly pick an
//! uncollapsed cell uniformly at random, collapse it to one of its
//! candidates, and propagate. A contradiction or the per-attempt iteration
//! cap discards the grid entirely and the next attempt starts from
//! scratch; there is no partial rollback. The total-attempt cap is the
//! only way a run over a satisfiable domain can fail.

use crate::algorithm::bitset::CategoryBitset;
use crate::algorithm::propagation::{Contradiction, propagate};
use crate::algorithm::seeding::{CompiledSeed, Seed, apply_seeds, compile_seeds};
use crate::domain::model::Domain;
use crate::io::configuration::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_ITERATIONS,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{GenerationError, Result};
use crate::spatial::Grid;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Map dimensions and restart limits for a generation run
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Collapse iterations allowed within a single attempt
    pub max_iterations: usize,
    /// Attempts allowed before giving up; `None` retries forever
    pub max_attempts: Option<usize>,
    /// Cells to pre-force before each attempt's collapse loop
    pub seeds: Vec<Seed>,
}

impl GeneratorConfig {
    /// Configuration with default limits for the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            seeds: Vec::new(),
        }
    }
}

/// A fully collapsed grid of category assignments
#[derive(Clone, Debug)]
pub struct CollapsedGrid {
    categories: Array2<usize>,
    /// Collapse iterations the converging attempt used
    pub iterations: usize,
}

impl CollapsedGrid {
    /// Map width in cells
    pub fn width(&self) -> usize {
        self.categories.ncols()
    }

    /// Map height in cells
    pub fn height(&self) -> usize {
        self.categories.nrows()
    }

    /// Category index assigned to the cell at (x, y)
    pub fn category_at(&self, x: usize, y: usize) -> Option<usize> {
        self.categories.get((y, x)).copied()
    }

    /// The full category assignment, row-major `[y, x]`
    pub const fn categories(&self) -> &Array2<usize> {
        &self.categories
    }
}

/// Result of running a single attempt over a fresh grid
#[derive(Clone, Debug)]
pub enum AttemptOutcome {
    /// Every cell collapsed; the grid is ready for projection
    Converged(CollapsedGrid),
    /// A cell ran out of candidates mid-propagation
    Contradicted(Contradiction),
    /// The per-attempt iteration cap was reached without convergence
    Exhausted {
        /// Iterations spent before the cap hit
        iterations: usize,
    },
}

/// Converged grid together with restart statistics for the whole run
#[derive(Clone, Debug)]
pub struct Generation {
    /// The collapsed category assignment
    pub grid: CollapsedGrid,
    /// Total attempts, including the converging one
    pub attempts: usize,
    /// Attempts discarded by contradiction
    pub contradictions: usize,
    /// Attempts discarded by the iteration cap
    pub exhaustions: usize,
}

/// Wave function collapse driver over one domain and configuration
///
/// Owns a master rng seeded from the caller's seed. Each attempt runs on an
/// attempt-local rng derived from the master, so attempts stay isolated and
/// a fixed seed reproduces the run byte for byte.
pub struct Generator {
    domain: Domain,
    config: GeneratorConfig,
    seeds: Vec<CompiledSeed>,
    rng: StdRng,
}

impl Generator {
    /// Create a generator, validating dimensions and seed directives
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds the safety limit
    /// - A seed directive is out of bounds or names an unknown category
    pub fn new(domain: Domain, config: GeneratorConfig, seed: u64) -> Result<Self> {
        if config.width == 0
            || config.height == 0
            || config.width > MAX_GRID_DIMENSION
            || config.height > MAX_GRID_DIMENSION
        {
            return Err(GenerationError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let seeds = compile_seeds(&domain, &config.seeds, config.width, config.height)?;

        Ok(Self {
            domain,
            config,
            seeds,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The domain this generator collapses over
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one attempt on a brand-new grid
    ///
    /// Failed attempts leave no state behind beyond advancing the master
    /// rng; callers restart by calling again.
    pub fn execute_attempt(&mut self) -> AttemptOutcome {
        let attempt_seed = self.rng.random::<u64>();
        self.run_attempt(attempt_seed)
    }

    /// Run attempts until one converges or the attempt cap trips
    ///
    /// Contradiction and exhaustion are expected transients handled by
    /// restarting; neither surfaces as an error here.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] once `max_attempts`
    /// attempts have been discarded. With an unbounded configuration an
    /// unsatisfiable rule table will loop forever.
    pub fn generate(&mut self) -> Result<Generation> {
        let mut attempts = 0;
        let mut contradictions = 0;
        let mut exhaustions = 0;

        loop {
            if let Some(cap) = self.config.max_attempts {
                if attempts >= cap {
                    return Err(GenerationError::AttemptsExhausted {
                        attempts,
                        contradictions,
                        exhaustions,
                    });
                }
            }
            attempts += 1;

            match self.execute_attempt() {
                AttemptOutcome::Converged(grid) => {
                    return Ok(Generation {
                        grid,
                        attempts,
                        contradictions,
                        exhaustions,
                    });
                }
                AttemptOutcome::Contradicted(_) => contradictions += 1,
                AttemptOutcome::Exhausted { .. } => exhaustions += 1,
            }
        }
    }

    /// Project a collapsed grid to tile indices using the master rng stream
    ///
    /// See [`projection`](crate::algorithm::projection) for the selection
    /// semantics.
    pub fn project(&mut self, collapsed: &CollapsedGrid) -> Array2<u32> {
        crate::algorithm::projection::project(&self.domain, collapsed, &mut self.rng)
    }

    fn run_attempt(&self, attempt_seed: u64) -> AttemptOutcome {
        let mut rng = StdRng::seed_from_u64(attempt_seed);
        let category_count = self.domain.category_count();
        let mut grid = Grid::new(self.config.width, self.config.height, category_count);
        apply_seeds(&mut grid, &self.seeds, category_count);

        let mut iterations = 0;
        loop {
            if grid.all_collapsed() {
                let Some(categories) = grid.to_categories() else {
                    // all_collapsed guarantees extraction succeeds
                    return AttemptOutcome::Exhausted { iterations };
                };
                return AttemptOutcome::Converged(CollapsedGrid {
                    categories,
                    iterations,
                });
            }

            iterations += 1;
            if iterations > self.config.max_iterations {
                return AttemptOutcome::Exhausted { iterations };
            }

            let open_cells = grid.uncollapsed_cells();
            let Some(&(x, y)) = open_cells.get(rng.random_range(0..open_cells.len())) else {
                continue;
            };

            let choices = grid
                .options(x, y)
                .map(CategoryBitset::to_vec)
                .unwrap_or_default();
            let Some(&choice) = choices.get(rng.random_range(0..choices.len())) else {
                continue;
            };

            grid.set_options(x, y, CategoryBitset::only(choice, category_count));

            if let Err(contradiction) = propagate(&mut grid, &self.domain, (x, y)) {
                return AttemptOutcome::Contradicted(contradiction);
            }
        }
    }
}
