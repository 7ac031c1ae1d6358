//! Tests for command-line parsing and the simulated tick loop

#[cfg(test)]
mod tests {
    use arenagen::GenerationError;
    use arenagen::LevelGenerator;
    use arenagen::io::cli::{Cli, Simulation, run};
    use arenagen::io::configuration::{
        DEFAULT_INTEREST_RADIUS, DEFAULT_PLAYERS, DEFAULT_SEED, DEFAULT_TICKS, GeneratorConfig,
    };
    use arenagen::io::ruleset::RulePreset;
    use clap::Parser;
    use std::path::PathBuf;

    fn plaza_simulation(players: usize) -> Simulation {
        let config = GeneratorConfig {
            seed: 3,
            interest_radius: 1,
            seed_radius: 1,
        };
        let generator =
            LevelGenerator::new(&RulePreset::Plaza.rules(), config).expect("valid generator");
        Simulation::new(generator, players, 3)
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["arenagen"]);

        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.ticks, DEFAULT_TICKS);
        assert_eq!(cli.players, DEFAULT_PLAYERS);
        assert_eq!(cli.radius, DEFAULT_INTEREST_RADIUS);
        assert_eq!(cli.preset, RulePreset::Network);
        assert!(cli.rules.is_none());
        assert!(cli.should_show_progress());
        assert_eq!(cli.verbose, 0);
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the value_enum attribute on preset
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "arenagen",
            "--seed",
            "123",
            "--ticks",
            "10",
            "--players",
            "4",
            "--radius",
            "3",
            "--seed-radius",
            "0",
            "--preset",
            "corridor",
            "--rules",
            "custom.rules",
            "--output",
            "out/level.png",
            "--scale",
            "2",
            "--ascii",
            "--quiet",
            "-vv",
        ]);

        assert_eq!(cli.seed, 123);
        assert_eq!(cli.ticks, 10);
        assert_eq!(cli.players, 4);
        assert_eq!(cli.preset, RulePreset::Corridor);
        assert_eq!(cli.rules, Some(PathBuf::from("custom.rules")));
        assert_eq!(cli.output, Some(PathBuf::from("out/level.png")));
        assert_eq!(cli.scale, 2);
        assert!(cli.ascii);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.generator_config(),
            GeneratorConfig {
                seed: 123,
                interest_radius: 3,
                seed_radius: 0,
            }
        );
    }

    // Verifies players only ever stand on floor
    // Verified by moving players without the collision check
    #[test]
    fn test_players_stay_on_floor() {
        let mut simulation = plaza_simulation(3);
        for _ in 0..60 {
            simulation.step();
        }

        let level = simulation.generator().get_level();
        assert_eq!(simulation.players().len(), 3);
        for player in simulation.players() {
            assert!(!level.is_solid(player.position), "player inside a wall");
        }
    }

    // Tests the summary accounts for every tick and diff entry
    // Verified by counting only non-empty diffs as ticks
    #[test]
    fn test_summary_totals() {
        let mut simulation = plaza_simulation(2);
        let seed_tiles = simulation.generator().get_level().len();

        let mut handed_out = 0;
        let mut largest = 0;
        for _ in 0..40 {
            let diff = simulation.step();
            handed_out += diff.len();
            largest = largest.max(diff.len());
        }

        let summary = simulation.summary();
        assert_eq!(summary.ticks, 40);
        assert_eq!(summary.diff_entries, handed_out);
        assert_eq!(summary.largest_diff, largest);
        assert_eq!(summary.tiles, seed_tiles + handed_out);
        assert_eq!(summary.contradictions, 0);
    }

    // Tests equal seeds replay the same walk
    // Verified by seeding the movement from the clock
    #[test]
    fn test_simulation_deterministic() {
        let walk = || {
            let mut simulation = plaza_simulation(2);
            (0..30).map(|_| simulation.step().len()).collect::<Vec<_>>()
        };
        assert_eq!(walk(), walk());
    }

    // Tests a full run writes the requested image
    // Verified by skipping the export step
    #[test]
    fn test_run_exports_image() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("nested").join("level.png");
        let output_arg = output.to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "arenagen",
            "--quiet",
            "--ticks",
            "15",
            "--preset",
            "plaza",
            "--output",
            output_arg.as_str(),
        ]);
        let summary = run(&cli).expect("run succeeds");

        assert_eq!(summary.ticks, 15);
        assert!(summary.tiles >= 9);
        assert!(output.exists());
    }

    // Tests a missing rule file aborts the run
    // Verified by falling back to the preset on read errors
    #[test]
    fn test_run_missing_rules() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let rules = temp_dir.path().join("absent.rules");
        let rules_arg = rules.to_string_lossy().into_owned();

        let cli = Cli::parse_from(["arenagen", "--quiet", "--rules", rules_arg.as_str()]);
        assert!(matches!(
            run(&cli),
            Err(GenerationError::FileSystem { .. })
        ));
    }
}
