//! Tests for argument parsing and end-to-end CLI runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wavemap::io::cli::{Cli, MapRunner};

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wavemap"]).unwrap();
        assert_eq!(cli.width, 50);
        assert_eq!(cli.height, 50);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.iterations, 100_000);
        assert_eq!(cli.attempts, 1_000);
        assert!(cli.output.is_none());
        assert!(!cli.no_seed);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "wavemap", "-W", "12", "-H", "9", "--seed", "7", "--attempts", "0", "--no-seed",
            "--quiet", "-o", "map.txt",
        ])
        .unwrap();

        assert_eq!(cli.width, 12);
        assert_eq!(cli.height, 9);
        assert_eq!(cli.seed, 7);
        assert!(cli.no_seed);
        assert!(cli.quiet);
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("map.txt")));
    }

    // 0 disables the attempt cap entirely
    #[test]
    fn test_zero_attempts_means_unbounded() {
        let cli = Cli::try_parse_from(["wavemap", "--attempts", "0"]).unwrap();
        assert_eq!(cli.max_attempts(), None);

        let cli = Cli::try_parse_from(["wavemap", "--attempts", "3"]).unwrap();
        assert_eq!(cli.max_attempts(), Some(3));
    }

    #[test]
    fn test_run_writes_tile_grid() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("generated_map.txt");
        let output_arg = output_path.to_str().unwrap();

        let cli = Cli::try_parse_from([
            "wavemap", "-W", "5", "-H", "4", "--attempts", "0", "--quiet", "-o", output_arg,
        ])
        .unwrap();

        let mut runner = MapRunner::new(cli);
        runner.run().unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 4);
        for row in rows {
            let tiles: Vec<&str> = row.split_whitespace().collect();
            assert_eq!(tiles.len(), 5);
            for tile in tiles {
                tile.parse::<u32>().unwrap();
            }
        }
    }
}
