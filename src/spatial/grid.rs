//! Grid state for a single generation attempt
//!
//! Each cell holds the set of categories it may still collapse to. Option
//! sets only ever shrink within an attempt; the grid is discarded wholesale
//! on restart, so no cross-attempt state exists.

use crate::algorithm::bitset::CategoryBitset;
use crate::domain::model::Direction;
use ndarray::Array2;

/// Fixed-size rectangular grid of candidate-category sets
///
/// Cells are addressed as (x, y) with the origin at the north-west corner;
/// storage is row-major `[y, x]`.
#[derive(Clone, Debug)]
pub struct Grid {
    options: Array2<CategoryBitset>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with every cell at full options
    pub fn new(width: usize, height: usize, category_count: usize) -> Self {
        let options =
            Array2::from_elem((height, width), CategoryBitset::all(category_count));
        Self {
            options,
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Candidate categories for the cell at (x, y)
    pub fn options(&self, x: usize, y: usize) -> Option<&CategoryBitset> {
        self.options.get((y, x))
    }

    /// Whether the cell has exactly one candidate left
    pub fn is_collapsed(&self, x: usize, y: usize) -> bool {
        self.options(x, y).is_some_and(|set| set.count() == 1)
    }

    /// The cell's single surviving category, if collapsed
    pub fn collapsed_category(&self, x: usize, y: usize) -> Option<usize> {
        self.options(x, y).and_then(CategoryBitset::single)
    }

    /// Whether every cell in the grid has collapsed
    pub fn all_collapsed(&self) -> bool {
        self.options.iter().all(|set| set.count() == 1)
    }

    /// Replace a cell's candidate set
    ///
    /// The new set must be a non-strict subset of the current one: options
    /// only tighten within an attempt. Out-of-bounds coordinates are
    /// ignored.
    pub fn set_options(&mut self, x: usize, y: usize, new_options: CategoryBitset) {
        if let Some(cell) = self.options.get_mut((y, x)) {
            debug_assert!(
                new_options.is_subset(cell),
                "options may only shrink at ({x}, {y})"
            );
            *cell = new_options;
        }
    }

    /// In-bounds neighbors of (x, y) with the direction leading to each
    ///
    /// Boundary cells yield fewer than four entries; there is no wraparound.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize, Direction)> {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y, Direction::West));
        }
        if x + 1 < self.width {
            neighbors.push((x + 1, y, Direction::East));
        }
        if y > 0 {
            neighbors.push((x, y - 1, Direction::North));
        }
        if y + 1 < self.height {
            neighbors.push((x, y + 1, Direction::South));
        }
        neighbors
    }

    /// Coordinates of every cell that has not collapsed, in row-major order
    ///
    /// The fixed order keeps random cell selection reproducible under a
    /// fixed rng seed.
    pub fn uncollapsed_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for ((y, x), set) in self.options.indexed_iter() {
            if set.count() > 1 {
                cells.push((x, y));
            }
        }
        cells
    }

    /// Snapshot of every cell's option-set size, row-major
    ///
    /// Used to check the monotonic-shrink invariant around propagation.
    pub fn option_counts(&self) -> Vec<usize> {
        self.options.iter().map(CategoryBitset::count).collect()
    }

    /// Extract the category assignment once every cell has collapsed
    ///
    /// Returns `None` if any cell still holds more than one candidate.
    pub fn to_categories(&self) -> Option<Array2<usize>> {
        let mut categories = Array2::zeros((self.height, self.width));
        for ((y, x), set) in self.options.indexed_iter() {
            let category = set.single()?;
            if let Some(slot) = categories.get_mut((y, x)) {
                *slot = category;
            }
        }
        Some(categories)
    }
}
