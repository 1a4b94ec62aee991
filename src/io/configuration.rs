//! Algorithm constants and runtime configuration defaults

// Round caps per selection policy
/// Round cap when cells are picked uniformly at random
pub const RANDOM_PICK_MAX_ROUNDS: usize = 200;
/// Round cap when the lowest-entropy cell is picked
pub const LOWEST_ENTROPY_MAX_ROUNDS: usize = 1000;

/// Probability that an equally small cell replaces the current best
pub const TIE_BREAK_PROBABILITY: f64 = 0.5;

// Default values for configurable parameters
/// Word placed horizontally at the origin before the first round
pub const DEFAULT_SEED_WORD: &str = "red";

/// Words laid out when none are given on the command line
pub const DEFAULT_WORDS: [&str; 27] = [
    "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white", "grey",
    "gray", "cyan", "magenta", "lime", "maroon", "olive", "navy", "teal", "aqua", "fuchsia",
    "silver", "gold", "coral", "indigo", "violet", "azure", "beige",
];

/// First seed tried by the sweep
pub const DEFAULT_START_SEED: u64 = 0;

/// Number of seeds tried by the sweep
pub const DEFAULT_SEED_BUDGET: u64 = 10_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Attempts between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: u64 = 16;
