//! Batch progress display for multi-level runs
//!
//! Single-level generation is effectively instantaneous; the bar only earns
//! its terminal space for larger batches, so callers gate construction on the
//! batch threshold.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Levels: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of generated levels
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the batch
    pub fn new(level_count: u64) -> Self {
        let bar = ProgressBar::new(level_count);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Mark one level as completed
    pub fn complete_level(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
