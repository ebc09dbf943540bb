//! Projection of collapsed categories onto concrete tile indices
//!
//! Categories with several output values are a texture-variety mechanism,
//! not a constraint: each cell draws one of its category's tile indices
//! uniformly and independently. Kept apart from the adjacency tables so
//! rendering concerns never reach the propagator.

use crate::algorithm::generator::CollapsedGrid;
use crate::domain::model::Domain;
use ndarray::Array2;
use rand::Rng;

/// Materialize a collapsed grid as tile indices for the external renderer
///
/// Output is row-major `[y, x]`, one tile index per cell, handed off
/// unchanged. Cells whose category has a single output value project
/// deterministically regardless of the rng.
pub fn project<R: Rng>(domain: &Domain, collapsed: &CollapsedGrid, rng: &mut R) -> Array2<u32> {
    let mut tiles = Array2::zeros((collapsed.height(), collapsed.width()));

    for ((y, x), &category) in collapsed.categories().indexed_iter() {
        let tile = domain
            .category(category)
            .map_or(0, |c| pick_output(c.outputs(), rng));
        if let Some(slot) = tiles.get_mut((y, x)) {
            *slot = tile;
        }
    }

    tiles
}

// Uniform draw; output lists are validated non-empty at domain build
fn pick_output<R: Rng>(outputs: &[u32], rng: &mut R) -> u32 {
    if outputs.len() == 1 {
        return outputs.first().copied().unwrap_or(0);
    }
    outputs
        .get(rng.random_range(0..outputs.len()))
        .copied()
        .unwrap_or(0)
}
