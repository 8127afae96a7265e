//! Declarative plugin description
//!
//! The concrete plugin type used by manifests: everything a plugin exposes,
//! as plain data.

use serde::{Deserialize, Serialize};

use super::Plugin;
use crate::version::{PluginVersion, ProjectVersion};

/// A plugin described by data rather than code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub name: String,

    #[serde(default)]
    pub version: PluginVersion,

    #[serde(default)]
    pub supported_project_versions: Vec<ProjectVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
}

impl PluginDescriptor {
    /// Create a new plugin descriptor
    pub fn new(
        name: impl Into<String>,
        version: PluginVersion,
        supported_project_versions: impl IntoIterator<Item = ProjectVersion>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            supported_project_versions: supported_project_versions.into_iter().collect(),
            deprecation_warning: None,
        }
    }

    /// Mark the plugin as deprecated
    #[must_use]
    pub fn with_deprecation_warning(mut self, warning: impl Into<String>) -> Self {
        self.deprecation_warning = Some(warning.into());
        self
    }
}

impl Plugin for PluginDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> PluginVersion {
        self.version
    }

    fn supported_project_versions(&self) -> &[ProjectVersion] {
        &self.supported_project_versions
    }

    fn deprecation_warning(&self) -> Option<&str> {
        self.deprecation_warning.as_deref().filter(|w| !w.is_empty())
    }
}
