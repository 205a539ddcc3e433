//! File system errors

use super::DoraError;

/// Creates a source not found error
pub fn source_not_found(path: impl Into<String>) -> DoraError {
    DoraError::SourceNotFound { path: path.into() }
}

/// Creates a not a directory error
pub fn not_a_directory(path: impl Into<String>) -> DoraError {
    DoraError::NotADirectory { path: path.into() }
}

/// Creates an error for a folder or website that could not be opened
pub fn open_failed(target: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::OpenFailed {
        target: target.into(),
        reason: reason.into(),
    }
}

/// Creates a directory traversal error
pub fn walk_failed(path: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::WalkFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
