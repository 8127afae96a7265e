//! Plugin keys and validation
//!
//! A plugin key is `<name>/<version>`, e.g. `go.example.io/v4`. Keys given by
//! users may omit the version part.

use std::sync::LazyLock;

use regex::Regex;

use super::Plugin;
use crate::error::{Result, invalid_plugin_name, plugin_validation_failed};
use crate::version::PluginVersion;

/// Maximum length of a DNS-1123 subdomain
pub const MAX_NAME_LENGTH: usize = 253;

#[allow(clippy::expect_used)]
static DNS1123_SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid DNS-1123 subdomain regex")
});

/// Unique identifying key of a plugin
pub fn key_for<P: Plugin + ?Sized>(plugin: &P) -> String {
    format!("{}/{}", plugin.name(), plugin.version())
}

/// Split a key into name and version; the version is empty when absent.
pub fn split_key(key: &str) -> (&str, &str) {
    key.split_once('/').unwrap_or((key, ""))
}

/// Name before the first domain label (`go.example.io` -> `go`)
pub fn short_name(name: &str) -> &str {
    name.split_once('.').map_or(name, |(short, _)| short)
}

/// Ensure a plugin name is a valid DNS-1123 subdomain
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid_plugin_name(name, "name cannot be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid_plugin_name(
            name,
            format!("must be no more than {MAX_NAME_LENGTH} characters"),
        ));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(name) {
        return Err(invalid_plugin_name(
            name,
            "must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character",
        ));
    }
    Ok(())
}

/// Ensure both parts of a key are valid
///
/// Keys without a version are accepted.
pub fn validate_key(key: &str) -> Result<()> {
    let (name, version) = split_key(key);
    validate_name(name)?;
    if !version.is_empty() {
        version.parse::<PluginVersion>()?;
    }
    Ok(())
}

/// Ensure a plugin is well formed
pub fn validate_plugin<P: Plugin + ?Sized>(plugin: &P) -> Result<()> {
    validate_name(plugin.name())?;

    let versions = plugin.supported_project_versions();
    if versions.is_empty() {
        return Err(plugin_validation_failed(
            key_for(plugin),
            "must support at least one project version",
        ));
    }
    for version in versions {
        version
            .validate()
            .map_err(|e| plugin_validation_failed(key_for(plugin), e.to_string()))?;
    }

    Ok(())
}
