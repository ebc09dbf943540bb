//! Static domain configuration consumed by the collapse loop
//!
//! The domain is built once at startup and never mutated: a category
//! vocabulary with concrete tile outputs, and a total adjacency rule table
//! over every (category, direction) pair.

/// Category vocabulary, directions, and adjacency rule tables
pub mod model;
/// Built-in grass/water/road map domain
pub mod overworld;

pub use model::{Direction, Domain, DomainBuilder};
