//! Tests for manifest module

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::PluginError;
use crate::plugin::Plugin;
use crate::version::{PluginVersion, ProjectVersion};

const MANIFEST: &str = r#"
plugins:
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["3"]
  - name: kustomize.example.io
    version: v2
    supportedProjectVersions: [3, "3-alpha"]
  - name: go.example.io
    version: v3
    supportedProjectVersions: ["2", "3"]
    deprecationWarning: go.example.io/v3 is deprecated, use go.example.io/v4
bundles:
  - name: base.example.io
    version: v4
    plugins: [kustomize.example.io, go.example.io/v4]
  - name: default.example.io
    version: v4
    plugins: [base.example.io/v4]
    deprecationMessage: use the base bundle directly
"#;

#[test]
fn test_manifest_from_yaml() {
    let manifest = PluginManifest::from_yaml(MANIFEST).unwrap();
    assert_eq!(manifest.plugins.len(), 3);
    assert_eq!(manifest.bundles.len(), 2);

    let kustomize = &manifest.plugins[1];
    assert_eq!(
        kustomize.supported_project_versions,
        vec![
            ProjectVersion::new(3),
            "3-alpha".parse::<ProjectVersion>().unwrap()
        ]
    );
    assert_eq!(manifest.bundles[0].version, PluginVersion::new(4));
    assert!(manifest.bundles[0].deprecation_message.is_none());
}

#[test]
fn test_manifest_resolves_bundles_in_order() {
    let catalog = PluginManifest::from_yaml(MANIFEST)
        .unwrap()
        .resolve()
        .unwrap();

    assert_eq!(
        catalog.keys().collect::<Vec<_>>(),
        [
            "go.example.io/v4",
            "kustomize.example.io/v2",
            "go.example.io/v3",
            "base.example.io/v4",
            "default.example.io/v4"
        ]
    );

    let default = catalog
        .get("default.example.io/v4")
        .and_then(|entry| entry.as_bundle())
        .unwrap();
    let members: Vec<&str> = default.plugins().iter().map(|p| p.name()).collect();
    assert_eq!(members, ["kustomize.example.io", "go.example.io"]);
    assert_eq!(default.supported_project_versions(), [ProjectVersion::new(3)]);
    assert_eq!(
        default.deprecation_warning(),
        Some("use the base bundle directly")
    );
}

#[test]
fn test_manifest_reports_deprecations() {
    let catalog = PluginManifest::from_yaml(MANIFEST)
        .unwrap()
        .resolve()
        .unwrap();
    let deprecated: Vec<String> = catalog.deprecated().map(|(key, _)| key).collect();
    assert_eq!(deprecated, ["go.example.io/v3", "default.example.io/v4"]);
}

#[test]
fn test_manifest_from_json() {
    let json = r#"{
  "plugins": [
    { "name": "go.example.io", "version": "v4", "supportedProjectVersions": ["3"] }
  ],
  "bundles": [
    { "name": "default.example.io", "version": "v4", "plugins": ["go.example.io/v4"] }
  ],
  "comment": "unknown fields are ignored"
}"#;
    let catalog = PluginManifest::from_json(json).unwrap().resolve().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.bundles().count(), 1);
}

#[test]
fn test_manifest_empty() {
    let manifest = PluginManifest::from_yaml("{}").unwrap();
    assert!(manifest.plugins.is_empty());
    assert!(manifest.resolve().unwrap().is_empty());
}

#[test]
fn test_manifest_rejects_invalid_plugin_name() {
    let yaml = r#"
plugins:
  - name: Go_Plugin
    version: v1
    supportedProjectVersions: ["3"]
"#;
    let err = PluginManifest::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PluginError::InvalidPluginName { .. }));
}

#[test]
fn test_manifest_rejects_plugin_without_project_versions() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v1
"#;
    let err = PluginManifest::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PluginError::PluginValidationFailed { .. }));
}

#[test]
fn test_manifest_rejects_bad_version() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: "4"
    supportedProjectVersions: ["3"]
"#;
    let err = PluginManifest::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PluginError::ConfigParseFailed { .. }));
}

#[test]
fn test_manifest_rejects_bad_member_key() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["3"]
bundles:
  - name: default.example.io
    plugins: [go.example.io/4]
"#;
    let err = PluginManifest::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PluginError::InvalidVersion { .. }));
}

#[test]
fn test_resolve_unknown_member() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["3"]
bundles:
  - name: default.example.io
    plugins: [go.example.io/v4, helm.example.io/v1]
"#;
    let err = PluginManifest::from_yaml(yaml)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, PluginError::PluginNotFound { ref key } if key == "helm.example.io/v1"));
}

#[test]
fn test_resolve_forward_reference_is_not_found() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["3"]
bundles:
  - name: outer.example.io
    plugins: [inner.example.io/v1]
  - name: inner.example.io
    version: v1
    plugins: [go.example.io/v4]
"#;
    let err = PluginManifest::from_yaml(yaml)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, PluginError::PluginNotFound { .. }));
}

#[test]
fn test_resolve_duplicate_plugin() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["3"]
  - name: go.example.io
    version: v4
    supportedProjectVersions: ["2"]
"#;
    let err = PluginManifest::from_yaml(yaml)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, PluginError::DuplicatePlugin { .. }));
}

#[test]
fn test_resolve_incompatible_bundle() {
    let yaml = r#"
plugins:
  - name: go.example.io
    version: v3
    supportedProjectVersions: ["2"]
  - name: kustomize.example.io
    version: v2
    supportedProjectVersions: ["3"]
bundles:
  - name: broken.example.io
    plugins: [go.example.io, kustomize.example.io]
"#;
    let err = PluginManifest::from_yaml(yaml)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, PluginError::NoCommonProjectVersion { .. }));
}

#[test]
fn test_manifest_to_yaml() {
    let manifest = PluginManifest::from_yaml(MANIFEST).unwrap();
    let yaml = manifest.to_yaml().unwrap();
    assert!(yaml.contains("supportedProjectVersions"));
    assert!(yaml.contains("deprecationMessage: use the base bundle directly"));

    let parsed = PluginManifest::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.plugins, manifest.plugins);
    assert_eq!(parsed.bundles.len(), 2);
}
