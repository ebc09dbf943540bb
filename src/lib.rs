//! Wave function collapse map generation over a fixed category vocabulary
//!
//! Starting from a grid where every cell may hold any tile category, the
//! collapse loop commits cells to single categories one at a time while
//! propagating directional adjacency constraints to their neighbors. A
//! contradiction or iteration cap discards the whole attempt and starts over
//! on a fresh grid; a converged grid is projected to concrete tile indices
//! for an external renderer.

#![forbid(unsafe_code)]

/// Core algorithm implementation including the collapse loop, constraint propagation, and result projection
pub mod algorithm;
/// Category vocabulary and directional adjacency rule tables
pub mod domain;
/// Input/output operations and error handling
pub mod io;
/// Attempt-scoped grid state management
pub mod spatial;

pub use io::error::{GenerationError, Result};
