//! Tick progress display for the simulation driver

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Ticks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over simulated server ticks
pub struct TickProgress {
    bar: ProgressBar,
}

impl TickProgress {
    /// Create a bar for `ticks` ticks, hidden when `visible` is false
    pub fn new(ticks: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(ticks as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(TICK_STYLE.clone());
        Self { bar }
    }

    /// Advance one tick and show the running level size
    pub fn tick(&self, level_tiles: usize, diff_tiles: usize) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("{level_tiles} tiles (+{diff_tiles})"));
    }

    /// Tick position reached so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Leave the final state on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}
