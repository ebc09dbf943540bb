//! Category vocabulary and directional adjacency rules
//!
//! Rules are compiled from name-keyed declarations into dense index-keyed
//! bitset tables so the propagation hot path never touches strings. The
//! builder rejects incomplete rule tables up front: a missing
//! (category, direction) entry is a configuration defect, not a runtime
//! contradiction.

use crate::algorithm::bitset::CategoryBitset;
use crate::io::error::{GenerationError, Result};
use std::collections::HashMap;
use std::fmt;

/// The four neighbor directions on the map grid
///
/// No diagonal adjacency and no wraparound; boundary cells simply have
/// fewer neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y
    North,
    /// Toward increasing y
    South,
    /// Toward increasing x
    East,
    /// Toward decreasing x
    West,
}

impl Direction {
    /// All four directions in a fixed order matching rule table layout
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Dense index into per-category rule tables
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Lowercase name as used in rule declarations
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named tile class with the concrete tile indices it may materialize as
///
/// Output values are a texture-variety mechanism only; adjacency is
/// constrained at the category level.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    outputs: Vec<u32>,
}

impl Category {
    /// Category name as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concrete tile indices this category may project to (never empty)
    pub fn outputs(&self) -> &[u32] {
        &self.outputs
    }
}

/// Immutable category vocabulary with a total adjacency rule table
///
/// Categories are identified by dense 0-based indices in declaration order.
/// `build` guarantees every (category, direction) pair has a rule entry, so
/// lookups during propagation cannot fail for a valid domain.
#[derive(Clone, Debug)]
pub struct Domain {
    categories: Vec<Category>,
    index_by_name: HashMap<String, usize>,
    rules: Vec<[CategoryBitset; 4]>,
}

impl Domain {
    /// Start declaring a new domain
    pub fn builder() -> DomainBuilder {
        DomainBuilder::default()
    }

    /// Number of declared categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Look up a category by dense index
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Resolve a category name to its dense index
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Categories permitted as `category`'s neighbor in `direction`
    ///
    /// Present for every (category, direction) pair of a built domain;
    /// `None` only for an out-of-range category index.
    pub fn allowed(&self, category: usize, direction: Direction) -> Option<&CategoryBitset> {
        self.rules
            .get(category)
            .and_then(|table| table.get(direction.index()))
    }

    /// A candidate set containing every declared category
    pub fn full_options(&self) -> CategoryBitset {
        CategoryBitset::all(self.categories.len())
    }
}

/// Accumulates category and rule declarations, then validates them into a [`Domain`]
#[derive(Debug, Default)]
pub struct DomainBuilder {
    categories: Vec<(String, Vec<u32>)>,
    rules: Vec<(String, Direction, Vec<String>)>,
}

impl DomainBuilder {
    /// Declare a category with its concrete output tile indices
    #[must_use]
    pub fn category(mut self, name: &str, outputs: &[u32]) -> Self {
        self.categories.push((name.to_string(), outputs.to_vec()));
        self
    }

    /// Declare which categories may sit next to `name` in `direction`
    ///
    /// Multiple declarations for the same pair are merged. Rules need not
    /// be symmetric; uneven tables are valid domain data.
    #[must_use]
    pub fn rule(mut self, name: &str, direction: Direction, neighbors: &[&str]) -> Self {
        self.rules.push((
            name.to_string(),
            direction,
            neighbors.iter().map(|n| (*n).to_string()).collect(),
        ));
        self
    }

    /// Validate the declarations and compile the rule tables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A category name is declared twice
    /// - A category has an empty output list
    /// - A rule references an undeclared category
    /// - Any (category, direction) pair is left without a rule entry
    pub fn build(self) -> Result<Domain> {
        let mut index_by_name = HashMap::new();
        let mut categories = Vec::with_capacity(self.categories.len());

        for (name, outputs) in self.categories {
            if outputs.is_empty() {
                return Err(GenerationError::EmptyCategory { category: name });
            }
            if index_by_name.insert(name.clone(), categories.len()).is_some() {
                return Err(GenerationError::DuplicateCategory { category: name });
            }
            categories.push(Category { name, outputs });
        }

        let capacity = categories.len();
        let mut tables: Vec<[Option<CategoryBitset>; 4]> = Vec::with_capacity(capacity);
        tables.resize_with(capacity, || [None, None, None, None]);

        for (name, direction, neighbors) in self.rules {
            let Some(&source) = index_by_name.get(&name) else {
                return Err(GenerationError::UnknownCategory { name });
            };

            let mut allowed = CategoryBitset::new(capacity);
            for neighbor in neighbors {
                let Some(&index) = index_by_name.get(&neighbor) else {
                    return Err(GenerationError::UnknownCategory { name: neighbor });
                };
                allowed.insert(index);
            }

            if let Some(slot) = tables
                .get_mut(source)
                .and_then(|table| table.get_mut(direction.index()))
            {
                match slot {
                    Some(existing) => {
                        for index in allowed.to_vec() {
                            existing.insert(index);
                        }
                    }
                    None => *slot = Some(allowed),
                }
            }
        }

        let mut rules = Vec::with_capacity(capacity);
        for (index, table) in tables.into_iter().enumerate() {
            let mut compiled = [
                CategoryBitset::new(capacity),
                CategoryBitset::new(capacity),
                CategoryBitset::new(capacity),
                CategoryBitset::new(capacity),
            ];
            for direction in Direction::ALL {
                let Some(allowed) = table
                    .get(direction.index())
                    .and_then(|entry| entry.as_ref())
                else {
                    return Err(GenerationError::MissingRule {
                        category: categories
                            .get(index)
                            .map_or_else(String::new, |c| c.name.clone()),
                        direction,
                    });
                };
                if let Some(slot) = compiled.get_mut(direction.index()) {
                    *slot = allowed.clone();
                }
            }
            rules.push(compiled);
        }

        Ok(Domain {
            categories,
            index_by_name,
            rules,
        })
    }
}
