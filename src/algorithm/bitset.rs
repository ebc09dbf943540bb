use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity bitset tracking which categories remain viable for a cell
///
/// Category indices are dense and 0-based, assigned by declaration order in
/// the domain. Provides O(1) membership testing and the set intersection
/// that drives constraint propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBitset {
    bits: BitVec,
    capacity: usize,
}

impl CategoryBitset {
    /// Create a bitset with no categories present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a bitset containing every category
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Create a bitset holding a single category
    pub fn only(category: usize, capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        set.insert(category);
        set
    }

    /// Insert a category index
    ///
    /// Indices at or beyond the capacity are ignored
    pub fn insert(&mut self, category: usize) {
        if category < self.capacity {
            self.bits.set(category, true);
        }
    }

    /// Test category membership
    pub fn contains(&self, category: usize) -> bool {
        self.bits.get(category).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no categories are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count categories in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining category, if the cell has collapsed
    ///
    /// Returns `None` while more than one candidate survives (or none at all)
    pub fn single(&self) -> Option<usize> {
        (self.count() == 1).then(|| self.bits.first_one()).flatten()
    }

    /// Test whether every member of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits.iter_ones().all(|category| other.contains(category))
    }

    /// Extract all category indices as a vector, in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CategoryBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CategoryBitset({} categories: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
