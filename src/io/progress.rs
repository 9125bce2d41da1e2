//! Progress display for batch preview generation

use crate::session::{SessionObserver, SessionStep};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across a batch of preview files
///
/// One bar tracks the file set; the bar message tracks the current file and
/// its pipeline step. A preview session has five steps, so per-step
/// messages are cheap enough to emit unconditionally.
pub struct ProgressManager {
    bar: ProgressBar,
    current_file: String,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar yet
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            current_file: String::new(),
        }
    }

    /// Initialize the bar for a known file count
    pub fn initialize(&mut self, file_count: usize) {
        self.bar = ProgressBar::new(file_count as u64);
        self.bar.set_style(BATCH_STYLE.clone());
    }

    /// Record the file currently being processed
    pub fn start_file(&mut self, path: &Path) {
        self.current_file = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(self.current_file.clone());
    }

    /// Mark the current file finished
    pub fn complete_file(&mut self) {
        self.bar.inc(1);
    }

    /// Clear the display once the batch finishes
    pub fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl SessionObserver for ProgressManager {
    fn step_started(&mut self, step: SessionStep) {
        self.bar
            .set_message(format!("{}: {}", self.current_file, step.label()));
    }
}
