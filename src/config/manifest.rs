//! Plugin manifest (plugins.yaml / plugins.json)
//!
//! A manifest declares plain plugins and bundles. Bundles reference their
//! members by key and may only reference plugins or bundles declared before
//! them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::catalog::Catalog;
use crate::error::{Result, config_parse_failed, config_read_failed};
use crate::plugin::{PluginDescriptor, validate_key, validate_name, validate_plugin};
use crate::version::PluginVersion;

/// Plugin manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Plain plugins
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,

    /// Bundles, composed in declaration order
    #[serde(default)]
    pub bundles: Vec<BundleDefinition>,
}

/// A bundle declaration in a manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDefinition {
    pub name: String,

    #[serde(default)]
    pub version: PluginVersion,

    /// Member keys (`name/version`, or a bare name if unambiguous)
    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl PluginManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest file
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| config_read_failed(path, e.to_string()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let manifest: Self = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| config_parse_failed(path, format!("Invalid JSON: {e}")))?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| config_parse_failed(path, format!("Invalid YAML: {e}")))?
        };
        manifest.validate()?;

        tracing::debug!(
            path = %path.display(),
            plugins = manifest.plugins.len(),
            bundles = manifest.bundles.len(),
            "loaded plugin manifest"
        );
        Ok(manifest)
    }

    /// Serialize the manifest to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate plugin declarations and bundle member keys
    pub fn validate(&self) -> Result<()> {
        for plugin in &self.plugins {
            validate_plugin(plugin)?;
        }

        for bundle in &self.bundles {
            validate_name(&bundle.name)?;
            for member in &bundle.plugins {
                validate_key(member)?;
            }
        }

        Ok(())
    }

    /// Build every plugin and bundle into a catalog
    ///
    /// # Errors
    /// Fails on invalid declarations, duplicate keys, unknown member keys, or
    /// bundles whose members share no project version.
    pub fn resolve(&self) -> Result<Catalog> {
        self.validate()?;

        let mut catalog = Catalog::new();
        for plugin in &self.plugins {
            catalog.insert(plugin.clone())?;
        }

        for definition in &self.bundles {
            let members = definition
                .plugins
                .iter()
                .map(|key| catalog.find(key))
                .collect::<Result<Vec<_>>>()?;

            let bundle = Bundle::builder()
                .name(definition.name.as_str())
                .version(definition.version)
                .plugins(members)
                .deprecation_message(definition.deprecation_message.clone().unwrap_or_default())
                .build()?;
            catalog.insert(bundle)?;
        }

        for (key, warning) in catalog.deprecated() {
            tracing::warn!(plugin = %key, "deprecated: {warning}");
        }

        Ok(catalog)
    }
}
