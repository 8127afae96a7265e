//! Options used to compose a bundle
//!
//! Options are applied in order to a fresh [`BundleOptions`]; for every field
//! the last option that sets it wins.

use crate::plugin::PluginRef;
use crate::version::PluginVersion;

/// In-progress bundle configuration
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    pub name: String,
    pub version: PluginVersion,
    pub plugins: Vec<PluginRef>,
    pub deprecation_message: String,
}

/// A single change to [`BundleOptions`]
#[derive(Debug, Clone)]
pub enum BundleOption {
    Name(String),
    Version(PluginVersion),
    /// Replaces the whole plugin list
    Plugins(Vec<PluginRef>),
    DeprecationMessage(String),
}

impl BundleOption {
    pub fn apply(self, options: &mut BundleOptions) {
        match self {
            BundleOption::Name(name) => options.name = name,
            BundleOption::Version(version) => options.version = version,
            BundleOption::Plugins(plugins) => options.plugins = plugins,
            BundleOption::DeprecationMessage(message) => options.deprecation_message = message,
        }
    }
}

impl BundleOptions {
    /// Apply `options` in order on top of the defaults
    pub fn from_options(options: impl IntoIterator<Item = BundleOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }
}

/// Set the bundle name
pub fn with_name(name: impl Into<String>) -> BundleOption {
    BundleOption::Name(name.into())
}

/// Set the bundle version
pub fn with_version(version: PluginVersion) -> BundleOption {
    BundleOption::Version(version)
}

/// Set the plugins composed into the bundle
pub fn with_plugins<I, P>(plugins: I) -> BundleOption
where
    I: IntoIterator<Item = P>,
    P: Into<PluginRef>,
{
    BundleOption::Plugins(plugins.into_iter().map(Into::into).collect())
}

/// Mark the bundle as deprecated
pub fn with_deprecation_message(message: impl Into<String>) -> BundleOption {
    BundleOption::DeprecationMessage(message.into())
}
