//! Common test utilities for plugin-bundle integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use plugin_bundle::{PluginDescriptor, PluginVersion, ProjectVersion};
use tempfile::TempDir;

/// A temporary directory holding manifest files
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        init_tracing();
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Route library logs to the test output; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A plain plugin at version v1 supporting the given project versions
pub fn plugin(name: &str, projects: &[u32]) -> PluginDescriptor {
    PluginDescriptor::new(
        name,
        PluginVersion::new(1),
        projects.iter().copied().map(ProjectVersion::new),
    )
}
