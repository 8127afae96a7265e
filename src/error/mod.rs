//! Error types and handling for plugin bundles
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle composition errors
//! - [`plugin`]: Plugin name, key and validation errors
//! - [`version`]: Version parsing errors
//! - [`config`]: Manifest loading and validation errors

pub mod bundle;
pub mod config;
pub mod plugin;
pub mod version;


pub use bundle::no_common_project_version;
pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use plugin::{
    duplicate as duplicate_plugin, invalid_name as invalid_plugin_name,
    not_found as plugin_not_found, validation_failed as plugin_validation_failed,
};
pub use version::invalid as invalid_version;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plugin and bundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum PluginError {
    // Bundle errors
    #[error("Cannot bundle plugins into '{bundle}': no common supported project version")]
    #[diagnostic(
        code(plugin_bundle::bundle::no_common_project_version),
        help(
            "In order to bundle plugins, they must all support at least one common project version. Members: {members}"
        )
    )]
    NoCommonProjectVersion { bundle: String, members: String },

    // Version errors
    #[error("Invalid {kind} version '{input}': {reason}")]
    #[diagnostic(
        code(plugin_bundle::version::invalid),
        help("Plugin versions look like v1 or v2-alpha, project versions like 3 or 3-beta")
    )]
    InvalidVersion {
        kind: &'static str,
        input: String,
        reason: String,
    },

    // Plugin errors
    #[error("Invalid plugin name '{name}': {reason}")]
    #[diagnostic(
        code(plugin_bundle::plugin::invalid_name),
        help("Plugin names must be DNS-1123 subdomains, e.g. go.example.io")
    )]
    InvalidPluginName { name: String, reason: String },

    #[error("Plugin '{key}' is invalid: {reason}")]
    #[diagnostic(code(plugin_bundle::plugin::validation_failed))]
    PluginValidationFailed { key: String, reason: String },

    #[error("Plugin '{key}' not found")]
    #[diagnostic(
        code(plugin_bundle::plugin::not_found),
        help("Bundles may only reference plugins and bundles declared before them")
    )]
    PluginNotFound { key: String },

    #[error("Plugin '{key}' is declared more than once")]
    #[diagnostic(code(plugin_bundle::plugin::duplicate))]
    DuplicatePlugin { key: String },

    // Configuration errors
    #[error("Failed to read manifest file: {path}")]
    #[diagnostic(code(plugin_bundle::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest file: {path}")]
    #[diagnostic(code(plugin_bundle::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(plugin_bundle::config::invalid))]
    ConfigInvalid { message: String },
}

impl From<serde_yaml::Error> for PluginError {
    fn from(err: serde_yaml::Error) -> Self {
        PluginError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PluginError>;
