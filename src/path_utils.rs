//! Cross-platform path utilities for DORA
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::{Path, PathBuf};

/// Folder name used when no destination is given
pub const DEFAULT_DESTINATION_NAME: &str = "sorted_dicoms";

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Default destination for a source folder: a `sorted_dicoms` sibling of the source
///
/// Existing sources are canonicalized first so `.` and `..` resolve to a real
/// parent. A source without a parent (e.g. `/`) gets the destination in the
/// current directory.
pub fn default_destination(source: &Path) -> PathBuf {
    let source = dunce::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_DESTINATION_NAME)
}

/// Whether `inner` lies inside `outer`, comparing canonical paths when both exist
pub fn is_within(inner: &Path, outer: &Path) -> bool {
    let outer = dunce::canonicalize(outer).unwrap_or_else(|_| outer.to_path_buf());
    let inner = canonicalize_lenient(inner);
    inner.starts_with(&outer)
}

/// Canonicalize the longest existing ancestor of `path` and re-append the rest
fn canonicalize_lenient(path: &Path) -> PathBuf {
    let mut existing = path.to_path_buf();
    let mut rest = Vec::new();

    while !existing.exists() {
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                rest.push(name.to_os_string());
                // a bare relative name continues from the current directory
                existing = if parent.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    parent.to_path_buf()
                };
            }
            _ => return path.to_path_buf(),
        }
    }

    let mut resolved = dunce::canonicalize(&existing).unwrap_or(existing);
    for name in rest.iter().rev() {
        resolved.push(name);
    }
    resolved
}
