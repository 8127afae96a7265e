//! Plugin bundles
//!
//! Compose named, versioned plugins into a single bundle plugin. A bundle is
//! only built when its members share at least one supported project version,
//! and member bundles are flattened so a bundle's plugin list never contains
//! another bundle.
//!
//! ```
//! use plugin_bundle::{Bundle, Plugin, PluginDescriptor, PluginVersion, ProjectVersion};
//! use plugin_bundle::bundle::{with_name, with_plugins, with_version};
//!
//! let go = PluginDescriptor::new(
//!     "go.example.io",
//!     PluginVersion::new(4),
//!     [ProjectVersion::new(3)],
//! );
//! let kustomize = PluginDescriptor::new(
//!     "kustomize.example.io",
//!     PluginVersion::new(2),
//!     [ProjectVersion::new(2), ProjectVersion::new(3)],
//! );
//!
//! let bundle = Bundle::with_options([
//!     with_name("default.example.io"),
//!     with_version(PluginVersion::new(4)),
//!     with_plugins([go, kustomize]),
//! ])?;
//! assert_eq!(bundle.supported_project_versions(), [ProjectVersion::new(3)]);
//! # Ok::<(), plugin_bundle::PluginError>(())
//! ```

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod plugin;
pub mod version;

pub use bundle::{Bundle, BundleBuilder, BundleOption};
pub use catalog::Catalog;
pub use config::PluginManifest;
pub use error::{PluginError, Result};
pub use plugin::{Plugin, PluginDescriptor, PluginRef};
pub use version::{PluginVersion, ProjectVersion, Stage};
