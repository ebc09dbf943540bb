//! Algorithm constants and runtime configuration defaults

/// Default map width in cells
pub const DEFAULT_MAP_WIDTH: usize = 50;
/// Default map height in cells
pub const DEFAULT_MAP_HEIGHT: usize = 50;

/// Default collapse iterations allowed within a single attempt
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Default attempts before a run gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
