//! Error types and handling for DORA
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Settings file errors
//! - [`dicom`]: DICOM read/write errors
//! - [`fs`]: File system errors
//! - [`template`]: Path template errors

pub mod config;
pub mod dicom;
pub mod fs;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for DORA operations
#[derive(Error, Diagnostic, Debug)]
pub enum DoraError {
    // Source and destination errors
    #[error("Source folder not found: {path}")]
    #[diagnostic(
        code(dora::sort::source_not_found),
        help("Check that the source folder exists and is accessible")
    )]
    SourceNotFound { path: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(code(dora::fs::not_a_directory))]
    NotADirectory { path: String },

    // Template errors
    #[error("Invalid template '{template}': {reason}")]
    #[diagnostic(
        code(dora::template::invalid),
        help("Use DICOM keywords in curly braces, e.g. {{PatientID}}/{{StudyDate}}. Write {{{{ and }}}} for literal braces")
    )]
    InvalidTemplate { template: String, reason: String },

    #[error("Unknown DICOM tag '{keyword}'")]
    #[diagnostic(
        code(dora::template::unknown_tag),
        help("Run 'dora tags' for common tags or 'dora tags --open' for the full registry (Keyword column)")
    )]
    UnknownTag { keyword: String },

    // DICOM errors
    #[error("Failed to read DICOM file: {path}: {reason}")]
    #[diagnostic(
        code(dora::dicom::read_failed),
        help("Use --keep-going to skip unreadable files, or --extension to only consider DICOM files")
    )]
    DicomReadFailed { path: String, reason: String },

    #[error("Failed to write DICOM file: {path}: {reason}")]
    #[diagnostic(code(dora::dicom::write_failed))]
    DicomWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Could not determine settings location: {message}")]
    #[diagnostic(
        code(dora::config::location),
        help("Set DORA_CONFIG to the path of a settings file")
    )]
    ConfigLocation { message: String },

    #[error("Failed to parse settings file: {path}: {reason}")]
    #[diagnostic(code(dora::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write settings file: {path}: {reason}")]
    #[diagnostic(code(dora::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("Unknown setting '{key}'")]
    #[diagnostic(
        code(dora::config::unknown_key),
        help("Known settings: show_common_tags, default_file_structure, default_folder_structure")
    )]
    UnknownConfigKey { key: String },

    #[error("Invalid value '{value}' for setting '{key}': {reason}")]
    #[diagnostic(code(dora::config::invalid_value))]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    // File system errors
    #[error("Failed to open '{target}': {reason}")]
    #[diagnostic(code(dora::fs::open_failed))]
    OpenFailed { target: String, reason: String },

    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(dora::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(dora::fs::invalid_pattern),
        help("Patterns are globs matched against paths relative to the source, e.g. **/DICOMDIR")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(dora::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dora::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DoraError {
    fn from(err: std::io::Error) -> Self {
        DoraError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DoraError {
    fn from(err: toml::de::Error) -> Self {
        DoraError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DoraError {
    fn from(err: toml::ser::Error) -> Self {
        DoraError::ConfigWriteFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DoraError {
    fn from(err: serde_json::Error) -> Self {
        DoraError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DoraError>;
