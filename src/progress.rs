//! Progress display for sorting runs
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! sort command can pick a progress bar or silence based on its flags
//! (`--quiet`, `--dry-run`, `--json`).

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a sorting run
pub trait ProgressReporter {
    /// Show that `path` is being processed
    fn update_file(&mut self, path: &str);

    /// Finish after the last file
    fn finish(&mut self);

    /// Abandon on error, leaving the bar where it stopped
    fn abandon(&mut self);
}

/// Interactive progress bar
pub struct InteractiveProgressReporter {
    file_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    /// Create a new progress bar with the total file count
    pub fn new(total_files: u64) -> Self {
        let file_pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
        {
            file_pb.set_style(style.progress_chars("#>-"));
        }

        Self { file_pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn update_file(&mut self, path: &str) {
        self.file_pb.set_message(truncate_path(path, 50));
        self.file_pb.inc(1);
    }

    fn finish(&mut self) {
        self.file_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.file_pb.abandon();
    }
}

/// No-op reporter
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn update_file(&mut self, _path: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Keep the tail of long paths, which carries the file name
fn truncate_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (max_chars - 3)).collect();
    format!("...{tail}")
}
