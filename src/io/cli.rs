//! Command-line interface for sweeping seeds over a word list

use crate::algorithm::executor::WaveConfig;
use crate::algorithm::selection::SelectionPolicy;
use crate::algorithm::sweep::{SeedSweep, SweepConfig, SweepReport};
use crate::algorithm::words::WordSet;
use crate::io::configuration::{
    DEFAULT_SEED_BUDGET, DEFAULT_SEED_WORD, DEFAULT_START_SEED, DEFAULT_WORDS,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::render::render_grid;
use clap::{Parser, ValueEnum};
use std::time::Instant;

/// Cell selection policy as named on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Uniformly random among cells with candidates
    #[default]
    Random,
    /// Cell with the fewest candidates, ties broken randomly
    LowestEntropy,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => Self::UniformRandom,
            PolicyArg::LowestEntropy => Self::LowestEntropy,
        }
    }
}

#[derive(Parser)]
#[command(name = "crosswave")]
#[command(
    author,
    version,
    about = "Lay out words crossword-style by sweeping random seeds"
)]
/// Command-line arguments for the layout generator
pub struct Cli {
    /// Words to lay out (defaults to a list of colour names)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Word placed horizontally at the origin before the first round
    #[arg(short = 'w', long, default_value = DEFAULT_SEED_WORD)]
    pub seed_word: String,

    /// First seed to try
    #[arg(short, long, default_value_t = DEFAULT_START_SEED)]
    pub start_seed: u64,

    /// Number of seeds to try
    #[arg(short = 'n', long, default_value_t = DEFAULT_SEED_BUDGET)]
    pub seeds: u64,

    /// Cell selection policy
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Random)]
    pub policy: PolicyArg,

    /// Rounds per attempt before giving up (defaults to the policy's cap)
    #[arg(short = 'r', long)]
    pub max_rounds: Option<usize>,

    /// Show candidate counts in empty cells of the printed layout
    #[arg(short, long)]
    pub candidates: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Words given on the command line, or the default list
    pub fn word_list(&self) -> Vec<String> {
        if self.words.is_empty() {
            DEFAULT_WORDS.iter().map(ToString::to_string).collect()
        } else {
            self.words.clone()
        }
    }

    /// Round loop parameters from the policy and optional cap override
    pub fn wave_config(&self) -> WaveConfig {
        let mut config = WaveConfig::for_policy(self.policy.into());
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        config
    }

    /// Build the sweep configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any word is invalid or the list is empty
    pub fn sweep_config(&self) -> Result<SweepConfig> {
        Ok(SweepConfig {
            seed_word: self.seed_word.clone(),
            words: WordSet::new(self.word_list())?,
            start_seed: self.start_seed,
            seed_budget: self.seeds,
            wave: self.wave_config(),
        })
    }
}

/// Runs the seed sweep with progress display and prints the best layout
pub struct SweepProcessor {
    cli: Cli,
}

impl SweepProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the sweep and print the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or an attempt hits a
    /// fatal error
    pub fn process(&self) -> Result<SweepReport> {
        let sweep = SeedSweep::new(self.cli.sweep_config()?)?;
        let start_time = Instant::now();

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.seeds)
        } else {
            ProgressManager::hidden()
        };
        let report = sweep.run_with(|record| progress.record(record));
        progress.finish();
        let report = report?;

        self.print_report(&report, start_time.elapsed().as_secs_f64());
        Ok(report)
    }

    // Allow print for the generated layout, which is the program's output
    #[allow(clippy::print_stdout)]
    fn print_report(&self, report: &SweepReport, seconds: f64) {
        println!(
            "{} of {} seeds solved in {seconds:.2}s",
            report.successes, report.attempts
        );

        match &report.best {
            Some(best) => {
                println!(
                    "Best layout: seed {}, area {} ({}x{})",
                    best.seed,
                    best.area,
                    best.bounds.width(),
                    best.bounds.height()
                );
                println!("{}", render_grid(&best.map, self.cli.candidates));
            }
            None => println!("No seed placed every word; try more seeds or a different list"),
        }
    }
}
