//! Directional constraint propagation from a freshly collapsed cell
//!
//! An explicit work-list walks the grid arc-consistently: each collapsed
//! cell restricts its neighbors to the categories its rules allow, and any
//! neighbor that shrinks is re-queued so the restriction travels
//! transitively. Terminates because every update strictly shrinks a
//! bounded set.

use crate::domain::model::Domain;
use crate::spatial::Grid;
use std::fmt;

/// A cell ran out of candidate categories during propagation
///
/// Identifies the emptied cell and the category whose collapse triggered
/// the wipeout. Terminal for the current attempt only; the driver responds
/// with a full restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// X coordinate of the emptied cell
    pub x: usize,
    /// Y coordinate of the emptied cell
    pub y: usize,
    /// Category whose placement left the cell without options
    pub source: usize,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no valid options remain at ({}, {}) after placing category {}",
            self.x, self.y, self.source
        )
    }
}

/// Propagate adjacency constraints outward from `start`
///
/// `start` is normally a cell that was just forced to a single category.
/// Cells popped from the work-list are only used as constraint sources
/// once they are collapsed; multi-option cells queued by pathological
/// orderings are skipped.
///
/// # Errors
///
/// Returns a [`Contradiction`] the moment any neighbor's candidate set
/// would become empty; the grid is left mid-tightening and must be
/// discarded by the caller.
pub fn propagate(
    grid: &mut Grid,
    domain: &Domain,
    start: (usize, usize),
) -> Result<(), Contradiction> {
    let mut pending = vec![start];

    while let Some((cx, cy)) = pending.pop() {
        let Some(source) = grid.collapsed_category(cx, cy) else {
            continue;
        };

        for (nx, ny, direction) in grid.neighbors(cx, cy) {
            let Some(allowed) = domain.allowed(source, direction) else {
                continue;
            };
            let Some(current) = grid.options(nx, ny) else {
                continue;
            };

            let narrowed = current.intersection(allowed);
            if narrowed.count() == current.count() {
                continue;
            }
            if narrowed.is_empty() {
                return Err(Contradiction {
                    x: nx,
                    y: ny,
                    source,
                });
            }

            grid.set_options(nx, ny, narrowed);
            pending.push((nx, ny));
        }
    }

    Ok(())
}
