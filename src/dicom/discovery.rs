//! Discovery of candidate DICOM files in a folder tree

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{Glob, Pattern};

use crate::error::{Result, fs};
use crate::path_utils::to_forward_slashes;

/// Normalize a user supplied extension to lowercase with a leading dot (`DCM` -> `.dcm`)
pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}

/// Recursively find all candidate DICOM files in a folder.
///
/// With `allowed_extensions` set to `None` every regular file is returned,
/// since DICOM files frequently have no extension at all. Otherwise the
/// lowercased extension (including the dot) must be in the set.
///
/// `excludes` are glob patterns matched against the path relative to
/// `folder`, using forward slashes.
///
/// The result is sorted by path so runs are reproducible.
pub fn find_dicoms_in_folder(
    folder: &Path,
    allowed_extensions: Option<&BTreeSet<String>>,
    excludes: &[String],
) -> Result<Vec<PathBuf>> {
    let globs = excludes
        .iter()
        .map(|pattern| Glob::new(pattern).map_err(|e| fs::invalid_pattern(pattern, e.to_string())))
        .collect::<Result<Vec<_>>>()?;

    let mut found = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|e| fs::walk_failed(folder.display().to_string(), e.to_string()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        if let Some(allowed) = allowed_extensions {
            let extension = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
                .unwrap_or_default();
            if !allowed.contains(&extension) {
                continue;
            }
        }

        if !globs.is_empty() {
            let relative = to_forward_slashes(path.strip_prefix(folder).unwrap_or(path));
            if globs.iter().any(|glob| glob.is_match(relative.as_str())) {
                tracing::debug!(path = %relative, "excluded by pattern");
                continue;
            }
        }

        found.push(path.to_path_buf());
    }

    found.sort();
    Ok(found)
}
