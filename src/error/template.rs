//! Path template errors

use super::DoraError;

/// Creates an invalid template error
pub fn invalid(template: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::InvalidTemplate {
        template: template.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown tag error
pub fn unknown_tag(keyword: impl Into<String>) -> DoraError {
    DoraError::UnknownTag {
        keyword: keyword.into(),
    }
}
