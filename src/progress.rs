//! Transient scan progress: a single status line naming the directory being
//! visited, overwritten in place and cleared before results print.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget};

/// Receives traversal progress. Purely diagnostic; never affects results.
pub trait ProgressSink {
    fn visit_dir(&self, path: &Path);
    fn clear(&self);
}

/// Ignores all progress. Used for `--json`, `--quiet` and tests.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn visit_dir(&self, _path: &Path) {}
    fn clear(&self) {}
}

/// Spinner on stderr showing the directory currently being scanned,
/// clamped to the terminal width.
pub struct SpinnerProgress {
    bar: ProgressBar,
    width: usize,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar.enable_steady_tick(Duration::from_millis(120));
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80);
        Self { bar, width }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SpinnerProgress {
    fn visit_dir(&self, path: &Path) {
        let budget = self.width.saturating_sub(12);
        let shown = clamp_left(&path.display().to_string(), budget);
        self.bar.set_message(format!("Scanning {shown}"));
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Truncate from the left with an ellipsis, keeping the tail of the path
/// visible.
pub fn clamp_left(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().skip(count - max_chars).collect();
    }
    let keep = max_chars - 3;
    let tail: String = text.chars().skip(count - keep).collect();
    format!("...{tail}")
}
