//! Pre-generation cell anchoring
//!
//! Seeds replace designated cells' options with a single pre-chosen
//! category before the collapse loop starts, biasing generation toward
//! connected structural features. Seeding itself never propagates; the
//! first collapse after seeding reconciles the neighbors.

use crate::algorithm::bitset::CategoryBitset;
use crate::domain::model::Domain;
use crate::io::error::{GenerationError, Result};
use crate::spatial::Grid;

/// Directive to pre-force one cell to a named category
#[derive(Clone, Debug)]
pub struct Seed {
    /// X coordinate of the anchored cell
    pub x: usize,
    /// Y coordinate of the anchored cell
    pub y: usize,
    /// Name of the category the cell is forced to
    pub category: String,
}

impl Seed {
    /// Create a seeding directive
    pub fn new(x: usize, y: usize, category: &str) -> Self {
        Self {
            x,
            y,
            category: category.to_string(),
        }
    }
}

/// A seed resolved against a domain and grid dimensions
#[derive(Clone, Copy, Debug)]
pub(crate) struct CompiledSeed {
    pub x: usize,
    pub y: usize,
    pub category: usize,
}

/// Resolve seed directives to category indices and bounds-check them
///
/// Violations are configuration errors: generation must not start with
/// directives it can never honor.
pub(crate) fn compile_seeds(
    domain: &Domain,
    seeds: &[Seed],
    width: usize,
    height: usize,
) -> Result<Vec<CompiledSeed>> {
    let mut compiled = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if seed.x >= width || seed.y >= height {
            return Err(GenerationError::SeedOutOfBounds {
                x: seed.x,
                y: seed.y,
                width,
                height,
            });
        }
        let Some(category) = domain.index_of(&seed.category) else {
            return Err(GenerationError::UnknownCategory {
                name: seed.category.clone(),
            });
        };
        compiled.push(CompiledSeed {
            x: seed.x,
            y: seed.y,
            category,
        });
    }
    Ok(compiled)
}

/// Apply compiled seeds to a fresh grid
///
/// Runs against full-option cells only, so the shrink invariant holds by
/// construction.
pub(crate) fn apply_seeds(grid: &mut Grid, seeds: &[CompiledSeed], category_count: usize) {
    for seed in seeds {
        grid.set_options(
            seed.x,
            seed.y,
            CategoryBitset::only(seed.category, category_count),
        );
    }
}
