//! Spatial data structures for attempt-scoped map state
//!
//! A grid lives exactly as long as one generation attempt: it is created
//! fresh, seeded, tightened in place, and either handed off fully collapsed
//! or discarded wholesale.

/// Candidate-set grid for one generation attempt
pub mod grid;

pub use grid::Grid;
