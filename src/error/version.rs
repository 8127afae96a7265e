//! Version parsing errors

use super::PluginError;

/// Creates an invalid version error
///
/// `kind` names the version flavour ("plugin", "project" or "stage").
pub fn invalid(
    kind: &'static str,
    input: impl Into<String>,
    reason: impl Into<String>,
) -> PluginError {
    PluginError::InvalidVersion {
        kind,
        input: input.into(),
        reason: reason.into(),
    }
}
