//! Tests for the attempt loop, restart accounting, and failure surfacing

#[cfg(test)]
mod tests {
    use wavemap::GenerationError;
    use wavemap::algorithm::generator::{AttemptOutcome, Generator, GeneratorConfig};
    use wavemap::domain::model::{Direction, Domain};

    fn free_domain() -> Domain {
        let mut builder = Domain::builder().category("A", &[0]).category("B", &[1]);
        for direction in Direction::ALL {
            builder = builder
                .rule("A", direction, &["A", "B"])
                .rule("B", direction, &["A", "B"]);
        }
        builder.build().unwrap()
    }

    // Every rule entry is declared but empty, so any collapse on a grid
    // with at least one neighbor pair wipes a cell out immediately
    fn unsatisfiable_domain() -> Domain {
        let mut builder = Domain::builder().category("A", &[0]).category("B", &[1]);
        for direction in Direction::ALL {
            builder = builder
                .rule("A", direction, &[])
                .rule("B", direction, &[]);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 50);
        assert_eq!(config.max_iterations, 100_000);
        assert_eq!(config.max_attempts, Some(1_000));
        assert!(config.seeds.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = GeneratorConfig::new(0, 10);
        let result = Generator::new(free_domain(), config, 1);
        assert!(matches!(
            result.map(|_| ()),
            Err(GenerationError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let config = GeneratorConfig::new(4, 20_000);
        let result = Generator::new(free_domain(), config, 1);
        assert!(matches!(
            result.map(|_| ()),
            Err(GenerationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_attempt_cap_surfaces_terminal_error() {
        let mut config = GeneratorConfig::new(2, 2);
        config.max_attempts = Some(25);

        let mut generator = Generator::new(unsatisfiable_domain(), config, 5).unwrap();
        match generator.generate() {
            Err(GenerationError::AttemptsExhausted {
                attempts,
                contradictions,
                exhaustions,
            }) => {
                assert_eq!(attempts, 25);
                assert_eq!(contradictions, 25);
                assert_eq!(exhaustions, 0);
            }
            other => unreachable!("expected AttemptsExhausted, got {other:?}"),
        }
    }

    // An iteration cap of one can never collapse a 3x3 grid of free
    // cells, so every attempt must end in exhaustion
    #[test]
    fn test_iteration_cap_counts_as_exhaustion() {
        let mut config = GeneratorConfig::new(3, 3);
        config.max_iterations = 1;
        config.max_attempts = Some(5);

        let mut generator = Generator::new(free_domain(), config, 5).unwrap();
        match generator.generate() {
            Err(GenerationError::AttemptsExhausted {
                attempts,
                contradictions,
                exhaustions,
            }) => {
                assert_eq!(attempts, 5);
                assert_eq!(contradictions, 0);
                assert_eq!(exhaustions, 5);
            }
            other => unreachable!("expected AttemptsExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_single_attempt_outcome_converges_on_free_domain() {
        let mut generator = Generator::new(free_domain(), GeneratorConfig::new(2, 2), 11).unwrap();
        match generator.execute_attempt() {
            AttemptOutcome::Converged(grid) => {
                assert_eq!(grid.width(), 2);
                assert_eq!(grid.height(), 2);
                assert!(grid.iterations >= 1);
                for y in 0..2 {
                    for x in 0..2 {
                        assert!(grid.category_at(x, y).is_some());
                    }
                }
            }
            other => unreachable!("free domain cannot fail an attempt: {other:?}"),
        }
    }

    #[test]
    fn test_collapsed_grid_accessors() {
        let mut generator = Generator::new(free_domain(), GeneratorConfig::new(3, 2), 8).unwrap();
        let generation = generator.generate().unwrap();

        assert_eq!(generation.grid.width(), 3);
        assert_eq!(generation.grid.height(), 2);
        assert_eq!(generation.grid.categories().nrows(), 2);
        assert_eq!(generation.grid.categories().ncols(), 3);
        assert_eq!(generation.grid.category_at(3, 0), None);
        assert_eq!(generation.grid.category_at(0, 2), None);
    }
}
