//! DICOM read/write errors

use super::DoraError;

/// Creates a DICOM read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::DicomReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a DICOM write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::DicomWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
