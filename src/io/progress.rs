//! Seed sweep progress display

use crate::algorithm::sweep::{AttemptOutcome, AttemptRecord};
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Seeds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks sweep progress on a single bar
///
/// The bar message carries the success count and the best area found.
pub struct ProgressManager {
    bar: ProgressBar,
    successes: u64,
    best: Option<(u64, u64)>,
    since_refresh: u64,
}

impl ProgressManager {
    /// Create a progress bar for `seed_budget` attempts
    pub fn new(seed_budget: u64) -> Self {
        let bar = ProgressBar::new(seed_budget);
        bar.set_style(SWEEP_STYLE.clone());
        Self {
            bar,
            successes: 0,
            best: None,
            since_refresh: 0,
        }
    }

    /// Hidden progress bar, used when output is suppressed
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            successes: 0,
            best: None,
            since_refresh: 0,
        }
    }

    /// Account for one finished attempt
    pub fn record(&mut self, record: &AttemptRecord) {
        if let AttemptOutcome::Solved { area, .. } = record.outcome {
            self.successes += 1;
            if record.improved {
                self.best = Some((record.seed, area));
            }
        }

        self.since_refresh += 1;
        if record.improved || self.since_refresh >= PROGRESS_REFRESH_INTERVAL {
            self.bar.inc(self.since_refresh);
            self.since_refresh = 0;
            self.bar.set_message(self.status());
        }
    }

    /// Flush pending increments, clear the bar and log the final tally
    pub fn finish(&mut self) {
        self.bar.inc(self.since_refresh);
        self.since_refresh = 0;
        self.bar.finish_and_clear();
        info!("sweep finished: {}", self.status());
    }

    /// Success count and best area seen so far, as shown on the bar
    pub fn status(&self) -> String {
        match self.best {
            Some((seed, area)) => {
                format!("{} solved, best area {area} (seed {seed})", self.successes)
            }
            None => format!("{} solved", self.successes),
        }
    }
}
