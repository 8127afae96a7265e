//! Plugin bundles
//!
//! A bundle composes several plugins into a single plugin. Composition
//! checks that the members share at least one supported project version and
//! flattens member bundles, so [`Bundle::plugins`] never contains a bundle.

pub mod builder;
pub mod options;


use std::sync::Arc;

use crate::error::{Result, no_common_project_version};
use crate::plugin::{Plugin, PluginRef, common_supported_project_versions, key_for};
use crate::version::{PluginVersion, ProjectVersion};

pub use builder::BundleBuilder;
pub use options::{
    BundleOption, BundleOptions, with_deprecation_message, with_name, with_plugins, with_version,
};

/// An immutable composition of plugins
#[derive(Debug, Clone)]
pub struct Bundle {
    name: String,
    version: PluginVersion,
    plugins: Vec<Arc<dyn Plugin>>,
    supported_project_versions: Vec<ProjectVersion>,
    deprecation_warning: String,
}

impl Bundle {
    /// Start a fluent bundle definition
    pub fn builder() -> BundleBuilder {
        BundleBuilder::new()
    }

    /// Compose a bundle from options
    ///
    /// Supported project versions are the ones shared by all the given
    /// plugins (bundles count with their own supported versions). Member
    /// bundles are replaced in place by their plugins.
    ///
    /// # Errors
    /// Returns `PluginError::NoCommonProjectVersion` when the plugins share no
    /// project version, which includes the case of no plugins at all.
    pub fn with_options(options: impl IntoIterator<Item = BundleOption>) -> Result<Self> {
        Self::from_config(BundleOptions::from_options(options))
    }

    /// Compose a bundle from an already assembled configuration
    ///
    /// # Errors
    /// See [`Bundle::with_options`].
    pub fn from_config(config: BundleOptions) -> Result<Self> {
        let BundleOptions {
            name,
            version,
            plugins,
            deprecation_message,
        } = config;

        let supported_project_versions = common_supported_project_versions(&plugins);
        if supported_project_versions.is_empty() {
            let members: Vec<String> = plugins.iter().map(PluginRef::key).collect();
            tracing::debug!(
                bundle = %name,
                members = ?members,
                "plugins share no project version"
            );
            return Err(no_common_project_version(name, &members));
        }

        let plugins = flatten(&plugins);

        tracing::debug!(
            bundle = %name,
            version = %version,
            plugins = plugins.len(),
            project_versions = ?supported_project_versions,
            "composed plugin bundle"
        );

        Ok(Self {
            name,
            version,
            plugins,
            supported_project_versions,
            deprecation_warning: deprecation_message,
        })
    }

    /// Member plugins, never bundles
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    /// `name/version` key of the bundle
    pub fn key(&self) -> String {
        key_for(self)
    }
}

/// Splice member bundles' plugins in place
///
/// Member bundles are flat already, so one level is enough. A `Leaf` built
/// directly around a bundle is still spliced.
fn flatten(plugins: &[PluginRef]) -> Vec<Arc<dyn Plugin>> {
    let mut flat = Vec::with_capacity(plugins.len());
    for plugin in plugins {
        match plugin {
            PluginRef::Bundle(bundle) => flat.extend(bundle.plugins().iter().cloned()),
            PluginRef::Leaf(leaf) => match leaf.as_bundle() {
                Some(bundle) => flat.extend(bundle.plugins().iter().cloned()),
                None => flat.push(Arc::clone(leaf)),
            },
        }
    }
    flat
}

impl Plugin for Bundle {
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
        if self.deprecation_warning.is_empty() {
            None
        } else {
            Some(&self.deprecation_warning)
        }
    }

    fn as_bundle(&self) -> Option<&Bundle> {
        Some(self)
    }
}
