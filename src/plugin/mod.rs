//! Plugin capability and references
//!
//! A [`Plugin`] is a named, versioned unit declaring which project versions
//! it supports. A [`PluginRef`] carries a plugin together with a tag telling
//! whether it is a plain plugin or a composed [`Bundle`]. The tag follows the
//! value: wrapping a bundle always yields [`PluginRef::Bundle`].

pub mod descriptor;
pub mod filter;
pub mod helpers;
pub mod key;


use std::fmt;
use std::sync::Arc;

use crate::bundle::Bundle;
use crate::version::{PluginVersion, ProjectVersion};

pub use descriptor::PluginDescriptor;
pub use filter::{filter_by_key, filter_by_project_version};
pub use helpers::{common_supported_project_versions, supports_project_version};
pub use key::{key_for, short_name, split_key, validate_key, validate_name, validate_plugin};

/// Capability every plugin exposes
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Plugin name, usually a DNS-1123 subdomain such as `go.example.io`
    fn name(&self) -> &str;

    fn version(&self) -> PluginVersion;

    /// Project versions this plugin can operate against
    fn supported_project_versions(&self) -> &[ProjectVersion];

    /// Deprecation notice, `None` when the plugin is not deprecated
    fn deprecation_warning(&self) -> Option<&str> {
        None
    }

    /// The plugin as a bundle, `None` unless it is one
    fn as_bundle(&self) -> Option<&Bundle> {
        None
    }
}

impl<P: Plugin + ?Sized> Plugin for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn version(&self) -> PluginVersion {
        (**self).version()
    }

    fn supported_project_versions(&self) -> &[ProjectVersion] {
        (**self).supported_project_versions()
    }

    fn deprecation_warning(&self) -> Option<&str> {
        (**self).deprecation_warning()
    }

    fn as_bundle(&self) -> Option<&Bundle> {
        (**self).as_bundle()
    }
}

/// A plugin tagged with whether it is a bundle
///
/// Bundles are flattened when they become members of another bundle, so the
/// tag is what composition matches on.
#[derive(Debug, Clone)]
pub enum PluginRef {
    Leaf(Arc<dyn Plugin>),
    Bundle(Arc<Bundle>),
}

impl PluginRef {
    /// Wrap a plugin, tagging it as a bundle if it is one
    pub fn leaf(plugin: impl Plugin + 'static) -> Self {
        if let Some(bundle) = plugin.as_bundle() {
            return PluginRef::Bundle(Arc::new(bundle.clone()));
        }
        PluginRef::Leaf(Arc::new(plugin))
    }

    /// The referenced value viewed as a plugin
    pub fn as_plugin(&self) -> &dyn Plugin {
        match self {
            PluginRef::Leaf(plugin) => &**plugin,
            PluginRef::Bundle(bundle) => &**bundle,
        }
    }

    pub fn is_bundle(&self) -> bool {
        self.as_bundle().is_some()
    }

    /// `name/version` key of the referenced plugin
    pub fn key(&self) -> String {
        key_for(self.as_plugin())
    }
}

impl Plugin for PluginRef {
    fn name(&self) -> &str {
        self.as_plugin().name()
    }

    fn version(&self) -> PluginVersion {
        self.as_plugin().version()
    }

    fn supported_project_versions(&self) -> &[ProjectVersion] {
        self.as_plugin().supported_project_versions()
    }

    fn deprecation_warning(&self) -> Option<&str> {
        self.as_plugin().deprecation_warning()
    }

    fn as_bundle(&self) -> Option<&Bundle> {
        self.as_plugin().as_bundle()
    }
}

impl From<Arc<dyn Plugin>> for PluginRef {
    fn from(plugin: Arc<dyn Plugin>) -> Self {
        if let Some(bundle) = plugin.as_bundle() {
            return PluginRef::Bundle(Arc::new(bundle.clone()));
        }
        PluginRef::Leaf(plugin)
    }
}

impl From<PluginDescriptor> for PluginRef {
    fn from(plugin: PluginDescriptor) -> Self {
        PluginRef::leaf(plugin)
    }
}

impl From<Bundle> for PluginRef {
    fn from(bundle: Bundle) -> Self {
        PluginRef::Bundle(Arc::new(bundle))
    }
}

impl From<Arc<Bundle>> for PluginRef {
    fn from(bundle: Arc<Bundle>) -> Self {
        PluginRef::Bundle(bundle)
    }
}
