//! Command implementations for the DORA CLI

pub mod completions;
pub mod config;
pub mod sort;
pub mod tags;
pub mod version;

use std::path::PathBuf;

use crate::error::Result;

/// Settings file given on the command line (or via `DORA_CONFIG`), else the
/// platform default
fn settings_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => crate::config::settings_path(),
    }
}
