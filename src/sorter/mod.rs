//! The sorting run
//!
//! [`sort_dicoms`] validates the options, parses both templates and discovers
//! the input files up front. The returned [`SortRun`] is an iterator that
//! processes one file per step, so callers can update a progress display
//! between files.

mod report;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::dicom::{find_dicoms_in_folder, read_dicom_file, save_dicom_file};
use crate::error::{DoraError, Result, fs};
use crate::path_utils::is_within;
use crate::template::{DEFAULT_FILE_STRUCTURE, DEFAULT_FOLDER_STRUCTURE, PathTemplate, create_path};

pub use report::SortReport;

/// What to do when a target path is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Leave the existing file and skip the input
    Skip,
    /// Write next to it as `<name>_1.<ext>`, `<name>_2.<ext>`, ...
    Rename,
}

/// Options for a sorting run
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub folder_structure: String,
    pub file_structure: String,
    /// Lowercased extensions with leading dot; `None` accepts every file
    pub allowed_extensions: Option<BTreeSet<String>>,
    /// Glob patterns, relative to `source`, of files to leave alone
    pub excludes: Vec<String>,
    pub on_conflict: ConflictPolicy,
    pub dry_run: bool,
    /// Record per-file failures and continue instead of stopping
    pub keep_going: bool,
}

impl SortOptions {
    /// Options with the default structures and policies
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            folder_structure: DEFAULT_FOLDER_STRUCTURE.to_string(),
            file_structure: DEFAULT_FILE_STRUCTURE.to_string(),
            allowed_extensions: None,
            excludes: Vec::new(),
            on_conflict: ConflictPolicy::default(),
            dry_run: false,
            keep_going: false,
        }
    }
}

/// Result of processing one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Written(PathBuf),
    /// Dry run: the file would have been written here
    Planned(PathBuf),
    /// Target taken and the conflict policy is [`ConflictPolicy::Skip`]
    Skipped(PathBuf),
    Failed(String),
}

/// Progress after one input file
#[derive(Debug, Clone)]
pub struct SortProgress {
    /// One-based position of this file
    pub index: usize,
    pub total: usize,
    pub source: PathBuf,
    pub outcome: SortOutcome,
}

/// Start sorting DICOM files from `options.source` into `options.destination`.
///
/// Nothing is read or written until the returned iterator is advanced.
pub fn sort_dicoms(options: &SortOptions) -> Result<SortRun> {
    let source = &options.source;
    if !source.exists() {
        return Err(fs::source_not_found(source.display().to_string()));
    }
    if !source.is_dir() {
        return Err(fs::not_a_directory(source.display().to_string()));
    }

    let folders = PathTemplate::folders(&options.folder_structure)?;
    let file_name = PathTemplate::file_name(&options.file_structure)?;
    debug!(
        folders = folders.as_str(),
        file_name = file_name.as_str(),
        tags = ?folders.keywords().chain(file_name.keywords()).collect::<Vec<_>>(),
        "templates parsed"
    );

    if is_within(&options.destination, source) {
        warn!(
            destination = %options.destination.display(),
            "destination is inside the source folder; sorted files will be picked up by later runs"
        );
    }

    let files = find_dicoms_in_folder(
        source,
        options.allowed_extensions.as_ref(),
        &options.excludes,
    )?;

    info!(
        source = %source.display(),
        destination = %options.destination.display(),
        files = files.len(),
        dry_run = options.dry_run,
        "starting sort"
    );

    Ok(SortRun {
        total: files.len(),
        files: files.into_iter(),
        index: 0,
        destination: options.destination.clone(),
        folders,
        file_name,
        on_conflict: options.on_conflict,
        dry_run: options.dry_run,
        keep_going: options.keep_going,
        produced: HashSet::new(),
        report: SortReport::new(source, &options.destination),
        stopped: false,
    })
}

/// An in-progress sort; yields one [`SortProgress`] per input file
pub struct SortRun {
    files: std::vec::IntoIter<PathBuf>,
    total: usize,
    index: usize,
    destination: PathBuf,
    folders: PathTemplate,
    file_name: PathTemplate,
    on_conflict: ConflictPolicy,
    dry_run: bool,
    keep_going: bool,
    produced: HashSet<PathBuf>,
    report: SortReport,
    stopped: bool,
}

impl SortRun {
    /// Number of input files discovered
    pub fn total(&self) -> usize {
        self.total
    }

    /// Counters so far
    pub fn report(&self) -> &SortReport {
        &self.report
    }

    /// Process every remaining file and return the final report
    pub fn finish(mut self) -> Result<SortReport> {
        for progress in &mut self {
            progress?;
        }
        Ok(self.report)
    }

    fn process(&mut self, path: &Path) -> Result<SortOutcome> {
        let object = match read_dicom_file(path) {
            Ok(object) => object,
            Err(e) if self.keep_going => return Ok(self.failed(path, &e)),
            Err(e) => return Err(e),
        };

        let target = create_path(&object, &self.destination, &self.folders, &self.file_name);
        let Some(target) = self.resolve_conflict(&target) else {
            return Ok(SortOutcome::Skipped(target));
        };

        if self.dry_run {
            self.produced.insert(target.clone());
            return Ok(SortOutcome::Planned(target));
        }

        match save_dicom_file(&object, &target) {
            Ok(()) => {
                self.produced.insert(target.clone());
                Ok(SortOutcome::Written(target))
            }
            Err(e) if self.keep_going => Ok(self.failed(path, &e)),
            Err(e) => Err(e),
        }
    }

    fn failed(&self, path: &Path, error: &DoraError) -> SortOutcome {
        warn!(path = %path.display(), error = %error, "skipping file");
        SortOutcome::Failed(error.to_string())
    }

    fn is_taken(&self, target: &Path) -> bool {
        self.produced.contains(target) || target.exists()
    }

    /// Apply the conflict policy; `None` means the input is skipped
    fn resolve_conflict(&self, target: &Path) -> Option<PathBuf> {
        if !self.is_taken(target) {
            return Some(target.to_path_buf());
        }

        match self.on_conflict {
            ConflictPolicy::Overwrite => {
                warn!(target = %target.display(), "overwriting existing file");
                Some(target.to_path_buf())
            }
            ConflictPolicy::Skip => {
                warn!(target = %target.display(), "target exists, skipping");
                None
            }
            ConflictPolicy::Rename => {
                let renamed = (1..)
                    .map(|n| numbered(target, n))
                    .find(|candidate| !self.is_taken(candidate))?;
                debug!(target = %renamed.display(), "target exists, renamed");
                Some(renamed)
            }
        }
    }
}

impl Iterator for SortRun {
    type Item = Result<SortProgress>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }

        let path = self.files.next()?;
        self.index += 1;

        match self.process(&path) {
            Ok(outcome) => {
                self.report.record(&path, &outcome);
                Some(Ok(SortProgress {
                    index: self.index,
                    total: self.total,
                    source: path,
                    outcome,
                }))
            }
            Err(e) => {
                self.stopped = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stopped {
            (0, Some(0))
        } else {
            self.files.size_hint()
        }
    }
}

/// `dir/name.ext` -> `dir/name_<n>.ext`
fn numbered(path: &Path, n: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{n}"),
    };
    path.with_file_name(name)
}
