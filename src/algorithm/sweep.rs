//! Seed sweep over independent attempts
//!
//! Runs the round loop once per seed, each time from a fresh seed grid and a
//! fresh copy of the word set, and keeps the layout with the smallest letter
//! bounding box. Attempts that hit the round cap are simply skipped.

use crate::{
    algorithm::executor::{Attempt, Solution, WaveConfig},
    algorithm::words::{WordSet, validate_word},
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::{BoundingBox, TileMap},
};
use log::{debug, info};

/// Sweep parameters
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Word placed at the origin before the first round of every attempt
    pub seed_word: String,
    /// Words to lay out
    pub words: WordSet,
    /// First seed tried
    pub start_seed: u64,
    /// Number of seeds tried
    pub seed_budget: u64,
    /// Round loop parameters shared by every attempt
    pub wave: WaveConfig,
}

/// How a single attempt ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Every word placed
    Solved {
        /// Rounds used
        rounds: usize,
        /// Area of the letter bounding box
        area: u64,
    },
    /// Round cap reached
    Failed {
        /// Rounds used
        rounds: usize,
    },
}

/// Result of one attempt, reported to sweep observers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Seed of the attempt
    pub seed: u64,
    /// How it ended
    pub outcome: AttemptOutcome,
    /// Whether it became the best layout so far
    pub improved: bool,
}

/// Smallest layout found so far
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestLayout {
    /// Seed that produced it
    pub seed: u64,
    /// Area of the letter bounding box
    pub area: u64,
    /// Letter bounding box
    pub bounds: BoundingBox,
    /// The grid
    pub map: TileMap,
}

/// Totals for a finished sweep
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Attempts run
    pub attempts: u64,
    /// Attempts that placed every word
    pub successes: u64,
    /// Smallest layout, if any attempt succeeded
    pub best: Option<BestLayout>,
}

/// Driver running one attempt per seed
pub struct SeedSweep {
    config: SweepConfig,
}

impl SeedSweep {
    /// Create a sweep
    ///
    /// # Errors
    ///
    /// Returns an error if the seed word is invalid, the word set is empty,
    /// or the seed budget or round cap is zero
    pub fn new(config: SweepConfig) -> Result<Self> {
        validate_word(&config.seed_word)?;
        if config.words.is_empty() {
            return Err(invalid_parameter(
                "words",
                &"",
                &"at least one word is required",
            ));
        }
        if config.seed_budget == 0 {
            return Err(invalid_parameter(
                "seed_budget",
                &config.seed_budget,
                &"must be at least 1",
            ));
        }
        if config.wave.max_rounds == 0 {
            return Err(invalid_parameter(
                "max_rounds",
                &config.wave.max_rounds,
                &"must be at least 1",
            ));
        }
        Ok(Self { config })
    }

    /// Sweep parameters
    pub const fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run a single attempt for `seed`
    ///
    /// # Errors
    ///
    /// Returns `IterationCapExceeded` when the attempt fails, or a fatal error
    pub fn attempt(&self, seed: u64) -> Result<Solution> {
        Attempt::new(
            &self.config.seed_word,
            self.config.words.clone(),
            seed,
            self.config.wave,
        )?
        .run()
    }

    /// Run every seed in the budget
    ///
    /// # Errors
    ///
    /// Returns the first error that is not an attempt failure
    pub fn run(&self) -> Result<SweepReport> {
        self.run_with(|_| {})
    }

    /// Run every seed in the budget, reporting each attempt to `observer`
    ///
    /// # Errors
    ///
    /// Returns the first error that is not an attempt failure
    pub fn run_with(&self, mut observer: impl FnMut(&AttemptRecord)) -> Result<SweepReport> {
        let mut report = SweepReport::default();
        let first = self.config.start_seed;
        let last = first.saturating_add(self.config.seed_budget);

        for seed in first..last {
            report.attempts += 1;
            let record = match self.attempt(seed) {
                Ok(solution) => Self::record_success(&mut report, solution),
                Err(AlgorithmError::IterationCapExceeded { rounds, pending }) => {
                    debug!("seed {seed}: gave up after {rounds} rounds with {pending} words pending");
                    AttemptRecord {
                        seed,
                        outcome: AttemptOutcome::Failed { rounds },
                        improved: false,
                    }
                }
                Err(error) => return Err(error),
            };
            observer(&record);
        }

        Ok(report)
    }

    fn record_success(report: &mut SweepReport, solution: Solution) -> AttemptRecord {
        report.successes += 1;
        let bounds = solution.map.letter_bounds();
        let area = bounds.as_ref().map_or(0, BoundingBox::area);
        let improved = report.best.as_ref().is_none_or(|best| area < best.area);

        if improved {
            if let Some(bounds) = bounds {
                info!(
                    "new best: seed {} with area {area} ({}x{})",
                    solution.seed,
                    bounds.width(),
                    bounds.height()
                );
                report.best = Some(BestLayout {
                    seed: solution.seed,
                    area,
                    bounds,
                    map: solution.map,
                });
            }
        }

        AttemptRecord {
            seed: solution.seed,
            outcome: AttemptOutcome::Solved {
                rounds: solution.rounds,
                area,
            },
            improved,
        }
    }
}
