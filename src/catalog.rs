//! Resolved plugins and bundles, addressable by key
//!
//! A catalog keeps entries in insertion order. Keys (`name/version`) are
//! unique within a catalog.

use std::collections::HashMap;

use crate::bundle::Bundle;
use crate::error::{Result, config_invalid, duplicate_plugin, plugin_not_found};
use crate::plugin::{self, Plugin, PluginRef, split_key};
use crate::version::ProjectVersion;

/// Ordered collection of plugins and bundles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<PluginRef>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin or bundle
    ///
    /// # Errors
    /// Returns `PluginError::DuplicatePlugin` if the key is already taken.
    pub fn insert(&mut self, plugin: impl Into<PluginRef>) -> Result<()> {
        let plugin = plugin.into();
        let key = plugin.key();
        if self.index.contains_key(&key) {
            return Err(duplicate_plugin(key));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(plugin);
        Ok(())
    }

    /// Entry with exactly this key
    pub fn get(&self, key: &str) -> Option<&PluginRef> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Find an entry by full key, or by bare name when only one version exists
    ///
    /// # Errors
    /// Returns `PluginError::PluginNotFound` when nothing matches and
    /// `PluginError::ConfigInvalid` when a bare name matches several versions.
    pub fn find(&self, key: &str) -> Result<PluginRef> {
        if let Some(found) = self.get(key) {
            return Ok(found.clone());
        }

        let (name, version) = split_key(key);
        if !version.is_empty() {
            return Err(plugin_not_found(key));
        }

        let mut matches = self.entries.iter().filter(|entry| entry.name() == name);
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found.clone()),
            (Some(_), Some(_)) => Err(config_invalid(format!(
                "'{name}' matches several versions, use a full name/version key"
            ))),
            (None, _) => Err(plugin_not_found(key)),
        }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[PluginRef] {
        &self.entries
    }

    /// Entries that are not bundles
    pub fn plugins(&self) -> impl Iterator<Item = &PluginRef> {
        self.entries.iter().filter(|entry| !entry.is_bundle())
    }

    pub fn bundles(&self) -> impl Iterator<Item = &Bundle> {
        self.entries.iter().filter_map(PluginRef::as_bundle)
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(PluginRef::key)
    }

    /// `(key, warning)` for every deprecated entry
    pub fn deprecated(&self) -> impl Iterator<Item = (String, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.deprecation_warning().map(|w| (entry.key(), w)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching a possibly partial key, see [`plugin::filter_by_key`]
    ///
    /// # Errors
    /// Returns `PluginError::InvalidVersion` if the key's version is malformed.
    pub fn filter_by_key(&self, key: &str) -> Result<Vec<PluginRef>> {
        plugin::filter_by_key(&self.entries, key)
    }

    /// Entries supporting `project_version`
    pub fn filter_by_project_version(&self, project_version: ProjectVersion) -> Vec<PluginRef> {
        plugin::filter_by_project_version(&self.entries, project_version)
    }
}
