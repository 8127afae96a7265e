//! Plugin name, key and validation errors

use super::PluginError;

/// Creates an invalid plugin name error
pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> PluginError {
    PluginError::InvalidPluginName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a plugin validation failed error
pub fn validation_failed(key: impl Into<String>, reason: impl Into<String>) -> PluginError {
    PluginError::PluginValidationFailed {
        key: key.into(),
        reason: reason.into(),
    }
}

/// Creates a plugin not found error
pub fn not_found(key: impl Into<String>) -> PluginError {
    PluginError::PluginNotFound { key: key.into() }
}

/// Creates a duplicate plugin error
pub fn duplicate(key: impl Into<String>) -> PluginError {
    PluginError::DuplicatePlugin { key: key.into() }
}
