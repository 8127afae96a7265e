//! Configuration file handling
//!
//! This module contains data structures for plugin manifests (`plugins.yaml`
//! or `plugins.json`), which declare plugins and the bundles composed from
//! them.

pub mod manifest;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use manifest::{BundleDefinition, PluginManifest};
