//! Selecting plugins by key or project version

use super::Plugin;
use super::key::split_key;
use crate::error::Result;
use crate::version::{PluginVersion, ProjectVersion};

/// Plugins matching a possibly partial key
///
/// The name part matches as a prefix, so `go` selects `go.example.io`. When
/// the key carries a version only plugins with exactly that version match.
pub fn filter_by_key<P: Plugin + Clone>(plugins: &[P], key: &str) -> Result<Vec<P>> {
    let (name, version) = split_key(key);
    let version = if version.is_empty() {
        None
    } else {
        Some(version.parse::<PluginVersion>()?)
    };

    Ok(plugins
        .iter()
        .filter(|plugin| plugin.name().starts_with(name))
        .filter(|plugin| version.is_none_or(|v| plugin.version() == v))
        .cloned()
        .collect())
}

/// Plugins that support `project_version`
pub fn filter_by_project_version<P: Plugin + Clone>(
    plugins: &[P],
    project_version: ProjectVersion,
) -> Vec<P> {
    plugins
        .iter()
        .filter(|plugin| super::supports_project_version(*plugin, project_version))
        .cloned()
        .collect()
}
