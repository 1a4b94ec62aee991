//! Tests for command-line parsing and sweep configuration

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crosswave::algorithm::selection::SelectionPolicy;
    use crosswave::io::cli::{Cli, PolicyArg, SweepProcessor};
    use crosswave::io::configuration::{
        DEFAULT_SEED_BUDGET, DEFAULT_SEED_WORD, DEFAULT_START_SEED, DEFAULT_WORDS,
        LOWEST_ENTROPY_MAX_ROUNDS, RANDOM_PICK_MAX_ROUNDS,
    };

    // Tests defaults when no arguments are given
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["crosswave"]);

        assert!(cli.words.is_empty());
        assert_eq!(cli.seed_word, DEFAULT_SEED_WORD);
        assert_eq!(cli.start_seed, DEFAULT_START_SEED);
        assert_eq!(cli.seeds, DEFAULT_SEED_BUDGET);
        assert_eq!(cli.policy, PolicyArg::Random);
        assert_eq!(cli.max_rounds, None);
        assert!(!cli.candidates);
        assert!(cli.should_show_progress());
        assert_eq!(cli.word_list().len(), DEFAULT_WORDS.len());
    }

    // Tests every argument is parsed
    // Verified by swapping the short flags for seeds and start seed
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "crosswave",
            "blue",
            "glue",
            "--seed-word",
            "rule",
            "-s",
            "5",
            "-n",
            "20",
            "--policy",
            "lowest-entropy",
            "-r",
            "50",
            "--candidates",
            "--quiet",
        ]);

        assert_eq!(cli.word_list(), vec!["blue", "glue"]);
        assert_eq!(cli.seed_word, "rule");
        assert_eq!(cli.start_seed, 5);
        assert_eq!(cli.seeds, 20);
        assert_eq!(cli.policy, PolicyArg::LowestEntropy);
        assert_eq!(cli.max_rounds, Some(50));
        assert!(cli.candidates);
        assert!(!cli.should_show_progress());
    }

    // Tests the round cap follows the policy unless overridden
    // Verified by ignoring the override
    #[test]
    fn test_wave_config() {
        let random = Cli::parse_from(["crosswave"]).wave_config();
        assert_eq!(random.policy, SelectionPolicy::UniformRandom);
        assert_eq!(random.max_rounds, RANDOM_PICK_MAX_ROUNDS);

        let lowest = Cli::parse_from(["crosswave", "-p", "lowest-entropy"]).wave_config();
        assert_eq!(lowest.policy, SelectionPolicy::LowestEntropy);
        assert_eq!(lowest.max_rounds, LOWEST_ENTROPY_MAX_ROUNDS);

        let capped = Cli::parse_from(["crosswave", "-p", "lowest-entropy", "-r", "9"]).wave_config();
        assert_eq!(capped.max_rounds, 9);
    }

    // Tests invalid words surface as configuration errors
    // Verified by skipping validation of command-line words
    #[test]
    fn test_sweep_config_validation() {
        let config = Cli::parse_from(["crosswave", "blue", "-n", "3"])
            .sweep_config()
            .expect("valid arguments");
        assert_eq!(config.seed_budget, 3);
        assert_eq!(config.words.len(), 1);

        assert!(Cli::parse_from(["crosswave", "Blue"]).sweep_config().is_err());
    }

    // Tests the processor runs a quiet sweep end to end
    // Verified by returning an empty report from the processor
    #[test]
    fn test_processor_runs_sweep() {
        let cli = Cli::parse_from(["crosswave", "blue", "-n", "2", "--quiet"]);

        let report = SweepProcessor::new(cli).process().expect("sweep runs");

        assert_eq!(report.attempts, 2);
        assert_eq!(report.successes, 2);
        assert_eq!(report.best.map(|best| best.area), Some(12));
    }

    // Tests invalid arguments are rejected before any attempt
    // Verified by clamping a zero seed budget to one
    #[test]
    fn test_processor_rejects_zero_seeds() {
        let cli = Cli::parse_from(["crosswave", "blue", "-n", "0", "--quiet"]);

        assert!(SweepProcessor::new(cli).process().is_err());
    }
}
