//! Settings file errors

use super::DoraError;

/// Creates an error for an undeterminable settings location
pub fn location(message: impl Into<String>) -> DoraError {
    DoraError::ConfigLocation {
        message: message.into(),
    }
}

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a settings write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DoraError {
    DoraError::ConfigWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown setting error
pub fn unknown_key(key: impl Into<String>) -> DoraError {
    DoraError::UnknownConfigKey { key: key.into() }
}

/// Creates an invalid setting value error
pub fn invalid_value(
    key: impl Into<String>,
    value: impl Into<String>,
    reason: impl Into<String>,
) -> DoraError {
    DoraError::InvalidConfigValue {
        key: key.into(),
        value: value.into(),
        reason: reason.into(),
    }
}
