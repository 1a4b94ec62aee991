use crate::{
    algorithm::insertion::{is_present, seed_map},
    algorithm::placement::{Placement, place_word},
    algorithm::propagation::{fill_candidates, reset_neighbours},
    algorithm::selection::{SelectionPolicy, select},
    algorithm::words::{WordSet, validate_word},
    io::error::{AlgorithmError, Result, invalid_parameter},
    io::render::render_grid,
    math::random::RandomSource,
    spatial::{Axis, Coordinate, TileMap},
};
use log::{Level, debug, log_enabled, trace};

/// Round loop parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveConfig {
    /// How the tile to commit is chosen each round
    pub policy: SelectionPolicy,
    /// Rounds allowed before the attempt fails
    pub max_rounds: usize,
}

impl WaveConfig {
    /// Configuration using the policy's default round cap
    pub const fn for_policy(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            max_rounds: policy.default_max_rounds(),
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self::for_policy(SelectionPolicy::default())
    }
}

/// What a single round did
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    /// One-based round number
    pub round: usize,
    /// Tile chosen in the select phase, if any had candidates
    pub selected: Option<Coordinate>,
    /// Word written in the place phase
    pub placed: Option<Placement>,
    /// Words found on the grid and dropped from the pending set
    pub completed: Vec<String>,
}

/// A grid holding every word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Seed of the attempt that produced it
    pub seed: u64,
    /// Rounds it took
    pub rounds: usize,
    /// The finished grid
    pub map: TileMap,
}

/// One seeded run of the round loop over its own grid and word set
///
/// Nothing is shared between attempts; a failed attempt is dropped whole.
#[derive(Clone, Debug)]
pub struct Attempt {
    seed: u64,
    config: WaveConfig,
    map: TileMap,
    pending: WordSet,
    random: RandomSource,
    round: usize,
}

impl Attempt {
    /// Start an attempt from a grid holding `seed_word` horizontally at the origin
    ///
    /// # Errors
    ///
    /// Returns an error if the seed word is invalid or the round cap is zero
    pub fn new(seed_word: &str, words: WordSet, seed: u64, config: WaveConfig) -> Result<Self> {
        validate_word(seed_word)?;
        let map = seed_map(seed_word, Coordinate::new(0, 0), Axis::Horizontal);
        Self::from_map(map, words, seed, config)
    }

    /// Start an attempt from an arbitrary grid
    ///
    /// Words already present on `map` are dropped from the pending set
    /// straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cap is zero
    pub fn from_map(map: TileMap, words: WordSet, seed: u64, config: WaveConfig) -> Result<Self> {
        if config.max_rounds == 0 {
            return Err(invalid_parameter(
                "max_rounds",
                &config.max_rounds,
                &"must be at least 1",
            ));
        }

        let mut attempt = Self {
            seed,
            config,
            map,
            pending: words,
            random: RandomSource::new(seed),
            round: 0,
        };
        let completed = attempt.reconcile();
        if !completed.is_empty() {
            debug!("seed {seed}: already on the grid: {}", completed.join(", "));
        }
        Ok(attempt)
    }

    /// Current grid
    pub const fn map(&self) -> &TileMap {
        &self.map
    }

    /// Words still waiting for placement
    pub const fn pending(&self) -> &WordSet {
        &self.pending
    }

    /// Rounds executed so far
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Seed driving this attempt
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Check whether every word has been placed
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run one round: reset, fill, select, place, reconcile
    ///
    /// A round where no tile has candidates changes nothing but still counts.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPickSource` if a pick is attempted on an empty sequence
    pub fn execute_round(&mut self) -> Result<RoundSummary> {
        self.round += 1;
        let mut summary = RoundSummary {
            round: self.round,
            ..RoundSummary::default()
        };

        reset_neighbours(&mut self.map);
        self.trace_phase("reset", false);

        fill_candidates(&mut self.map, &self.pending);
        self.trace_phase("fill", true);

        match select(self.config.policy, &self.map, &mut self.random) {
            Ok(selection) => {
                summary.selected = Some(selection.at);
                let letters = selection.candidates.to_vec();
                let &choice = self.random.pick(&letters, "choose_letter")?;
                summary.placed = place_word(&mut self.map, &self.pending, selection.at, choice);
                self.trace_phase("place", false);
            }
            Err(AlgorithmError::NoEligibleTile { open_tiles }) => {
                debug!(
                    "seed {} round {}: nothing to select among {open_tiles} open tiles",
                    self.seed, self.round
                );
            }
            Err(error) => return Err(error),
        }

        summary.completed = self.reconcile();
        Ok(summary)
    }

    /// Run rounds until every word is placed or the round cap is hit
    ///
    /// # Errors
    ///
    /// Returns `IterationCapExceeded` once `max_rounds` rounds leave words
    /// pending, or any fatal error raised by a round
    pub fn run(mut self) -> Result<Solution> {
        while !self.is_complete() {
            if self.round >= self.config.max_rounds {
                return Err(AlgorithmError::IterationCapExceeded {
                    rounds: self.round,
                    pending: self.pending.len(),
                });
            }
            self.execute_round()?;
        }

        debug!("seed {} solved in {} rounds", self.seed, self.round);
        Ok(Solution {
            seed: self.seed,
            rounds: self.round,
            map: self.map,
        })
    }

    /// Reconciliation phase: drop pending words already on the grid
    fn reconcile(&mut self) -> Vec<String> {
        let snapshot: Vec<String> = self.pending.iter().map(str::to_string).collect();
        let completed: Vec<String> = snapshot
            .into_iter()
            .filter(|word| is_present(&self.map, word))
            .collect();
        for word in &completed {
            self.pending.remove(word);
        }
        completed
    }

    fn trace_phase(&self, phase: &str, show_candidates: bool) {
        if log_enabled!(Level::Trace) {
            trace!(
                "seed {} round {} after {phase}:\n{}",
                self.seed,
                self.round,
                render_grid(&self.map, show_candidates)
            );
        }
    }
}
