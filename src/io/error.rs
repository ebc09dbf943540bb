//! Error types for configuration and run failures
//!
//! Contradiction and exhaustion are attempt-level transients consumed
//! inside the driver; only malformed configuration and total-attempt
//! exhaustion surface to callers.

use crate::domain::model::Direction;
use std::fmt;
use std::path::PathBuf;

/// Main error type for map generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Grid dimensions are zero or exceed the safety limit
    InvalidDimensions {
        /// Requested map width
        width: usize,
        /// Requested map height
        height: usize,
    },

    /// The rule table has no entry for a declared (category, direction) pair
    MissingRule {
        /// Category missing the entry
        category: String,
        /// Direction missing the entry
        direction: Direction,
    },

    /// A rule or seed references a category that was never declared
    UnknownCategory {
        /// The unresolved category name
        name: String,
    },

    /// A category declared no concrete output values
    EmptyCategory {
        /// The offending category name
        category: String,
    },

    /// The same category name was declared twice
    DuplicateCategory {
        /// The repeated category name
        category: String,
    },

    /// A seed directive targets a cell outside the grid
    SeedOutOfBounds {
        /// Seed x coordinate
        x: usize,
        /// Seed y coordinate
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Every allowed attempt was discarded without convergence
    AttemptsExhausted {
        /// Attempts made before giving up
        attempts: usize,
        /// Attempts discarded by contradiction
        contradictions: usize,
        /// Attempts discarded by the iteration cap
        exhaustions: usize,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: both must be positive and at most the safety limit"
                )
            }
            Self::MissingRule {
                category,
                direction,
            } => {
                write!(
                    f,
                    "Adjacency rules for category '{category}' have no entry for direction '{direction}'"
                )
            }
            Self::UnknownCategory { name } => {
                write!(f, "Category '{name}' is not declared in the domain")
            }
            Self::EmptyCategory { category } => {
                write!(f, "Category '{category}' has no output tile values")
            }
            Self::DuplicateCategory { category } => {
                write!(f, "Category '{category}' is declared more than once")
            }
            Self::SeedOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Seed at ({x}, {y}) lies outside the {width}x{height} grid"
                )
            }
            Self::AttemptsExhausted {
                attempts,
                contradictions,
                exhaustions,
            } => {
                write!(
                    f,
                    "Gave up after {attempts} attempts ({contradictions} contradictions, {exhaustions} iteration-limit restarts)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
