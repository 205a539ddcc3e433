//! Summary of a sorting run

use std::path::Path;

use serde::Serialize;

use super::SortOutcome;

/// A file that could not be sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: String,
    pub reason: String,
}

/// Counters for a sorting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortReport {
    pub source: String,
    pub destination: String,
    pub processed: usize,
    pub written: usize,
    pub planned: usize,
    pub skipped: usize,
    pub failed: Vec<FailedFile>,
}

impl SortReport {
    pub fn new(source: &Path, destination: &Path) -> Self {
        Self {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            ..Self::default()
        }
    }

    pub(super) fn record(&mut self, path: &Path, outcome: &SortOutcome) {
        self.processed += 1;
        match outcome {
            SortOutcome::Written(_) => self.written += 1,
            SortOutcome::Planned(_) => self.planned += 1,
            SortOutcome::Skipped(_) => self.skipped += 1,
            SortOutcome::Failed(reason) => self.failed.push(FailedFile {
                path: path.display().to_string(),
                reason: reason.clone(),
            }),
        }
    }

    /// Whether every processed file ended up written or planned
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
