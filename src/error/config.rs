//! Plugin manifest errors

use std::path::Path;

use super::PluginError;

/// The manifest at `path` could not be read from disk
pub fn read_failed(path: &Path, reason: impl Into<String>) -> PluginError {
    PluginError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// The manifest at `path` is not well-formed YAML or JSON, or its fields do
/// not deserialize (a malformed version, for instance)
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> PluginError {
    PluginError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

// Parsed but inconsistent, e.g. an ambiguous bare plugin name in a bundle.
pub fn invalid(message: impl Into<String>) -> PluginError {
    PluginError::ConfigInvalid {
        message: message.into(),
    }
}
