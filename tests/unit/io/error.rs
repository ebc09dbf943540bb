//! Tests for error display and conversions

#[cfg(test)]
mod tests {
    use wavemap::GenerationError;
    use wavemap::domain::model::Direction;
    use wavemap::io::error::invalid_parameter;

    #[test]
    fn test_configuration_error_messages() {
        let missing = GenerationError::MissingRule {
            category: "waterMM".to_string(),
            direction: Direction::North,
        };
        assert!(missing.to_string().contains("waterMM"));
        assert!(missing.to_string().contains("north"));

        let unknown = GenerationError::UnknownCategory {
            name: "lava".to_string(),
        };
        assert!(unknown.to_string().contains("lava"));

        let empty = GenerationError::EmptyCategory {
            category: "void".to_string(),
        };
        assert!(empty.to_string().contains("void"));

        let dims = GenerationError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert!(dims.to_string().contains("0x5"));

        let seed = GenerationError::SeedOutOfBounds {
            x: 9,
            y: 2,
            width: 5,
            height: 5,
        };
        assert!(seed.to_string().contains("(9, 2)"));
        assert!(seed.to_string().contains("5x5"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("attempts", &"-1", &"must be non-negative");
        assert!(
            err.to_string()
                .contains("Invalid parameter 'attempts' = '-1'")
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::other("boom");
        let err: GenerationError = io_err.into();
        assert!(matches!(err, GenerationError::FileSystem { .. }));
    }
}
