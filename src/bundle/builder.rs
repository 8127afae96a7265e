//! Fluent construction of bundles

use super::Bundle;
use super::options::{
    BundleOption, with_deprecation_message, with_name, with_plugins, with_version,
};
use crate::error::Result;
use crate::plugin::PluginRef;
use crate::version::PluginVersion;

/// Collects bundle options in call order
///
/// ```
/// use plugin_bundle::{Bundle, PluginDescriptor, PluginVersion, ProjectVersion};
///
/// let go = PluginDescriptor::new("go.example.io", PluginVersion::new(4), [ProjectVersion::new(3)]);
/// let bundle = Bundle::builder()
///     .name("default.example.io")
///     .version(PluginVersion::new(4))
///     .plugins([go])
///     .build()?;
/// assert_eq!(bundle.plugins().len(), 1);
/// # Ok::<(), plugin_bundle::PluginError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BundleBuilder {
    options: Vec<BundleOption>,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.option(with_name(name))
    }

    pub fn version(self, version: PluginVersion) -> Self {
        self.option(with_version(version))
    }

    /// Replaces any previously set plugins
    pub fn plugins<I, P>(self, plugins: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PluginRef>,
    {
        self.option(with_plugins(plugins))
    }

    pub fn deprecation_message(self, message: impl Into<String>) -> Self {
        self.option(with_deprecation_message(message))
    }

    /// Append a raw option
    pub fn option(mut self, option: BundleOption) -> Self {
        self.options.push(option);
        self
    }

    /// Compose the bundle from the collected options
    pub fn build(self) -> Result<Bundle> {
        Bundle::with_options(self.options)
    }
}
