//! Guards the documented configuration defaults

#[cfg(test)]
mod tests {
    use wavemap::io::configuration::{
        DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_ITERATIONS,
        DEFAULT_SEED, MAX_GRID_DIMENSION,
    };

    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_MAP_WIDTH, 50);
        assert_eq!(DEFAULT_MAP_HEIGHT, 50);
        assert_eq!(DEFAULT_MAX_ITERATIONS, 100_000);
        assert_eq!(DEFAULT_MAX_ATTEMPTS, 1_000);
        assert_eq!(DEFAULT_SEED, 42);
    }

    #[test]
    fn test_safety_limit_exceeds_defaults() {
        assert!(DEFAULT_MAP_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_MAP_HEIGHT <= MAX_GRID_DIMENSION);
    }
}
