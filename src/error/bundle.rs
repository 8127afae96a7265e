//! Bundle composition errors

use super::PluginError;

/// Creates a no common project version error
///
/// `members` are the keys of the plugins that were supplied to the bundle.
pub fn no_common_project_version(bundle: impl Into<String>, members: &[String]) -> PluginError {
    let members = if members.is_empty() {
        "(none)".to_string()
    } else {
        members.join(", ")
    };
    PluginError::NoCommonProjectVersion {
        bundle: bundle.into(),
        members,
    }
}
