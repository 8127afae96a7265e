//! Project version support across plugins

use std::collections::BTreeSet;

use super::Plugin;
use crate::version::ProjectVersion;

/// Whether `plugin` supports `project_version`
pub fn supports_project_version<P: Plugin + ?Sized>(
    plugin: &P,
    project_version: ProjectVersion,
) -> bool {
    plugin
        .supported_project_versions()
        .contains(&project_version)
}

/// Project versions supported by every plugin, sorted ascending
///
/// No plugins means no common version.
pub fn common_supported_project_versions<'a, P, I>(plugins: I) -> Vec<ProjectVersion>
where
    P: Plugin + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut plugins = plugins.into_iter();
    let Some(first) = plugins.next() else {
        return Vec::new();
    };

    let mut common: BTreeSet<ProjectVersion> =
        first.supported_project_versions().iter().copied().collect();
    for plugin in plugins {
        if common.is_empty() {
            break;
        }
        let supported = plugin.supported_project_versions();
        common.retain(|version| supported.contains(version));
    }

    common.into_iter().collect()
}
