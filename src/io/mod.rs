//! Input/output operations surrounding the collapse core
//!
//! Everything here runs strictly before or after the algorithm: argument
//! parsing, configuration defaults, progress display, and writing the
//! projected tile grid for the external renderer.

/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for configuration and run failures
pub mod error;
/// Tile-grid export for the external renderer
pub mod output;
/// Attempt progress reporting
pub mod progress;
