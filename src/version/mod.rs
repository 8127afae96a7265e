//! Plugin and project versions
//!
//! Both flavours share the same shape: a number plus a release [`Stage`].
//! Plugin versions carry a `v` prefix (`v4`, `v2-alpha`), project versions
//! do not (`3`, `3-beta`).

mod plugin_version;
mod project_version;
mod stage;


pub use plugin_version::PluginVersion;
pub use project_version::ProjectVersion;
pub use stage::Stage;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, invalid_version};

#[allow(clippy::expect_used)]
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)(?:-([a-z]+))?$").expect("valid version regex")
});

/// Parses `<number>[-<stage>]` (after any prefix has been stripped).
fn parse_numbered(kind: &'static str, original: &str, body: &str) -> Result<(u32, Stage)> {
    let caps = NUMBERED_RE.captures(body).ok_or_else(|| {
        invalid_version(kind, original, "expected <number> or <number>-<stage>")
    })?;

    let number = caps[1]
        .parse::<u32>()
        .map_err(|e| invalid_version(kind, original, e.to_string()))?;

    let stage = match caps.get(2) {
        Some(stage) => stage.as_str().parse::<Stage>().map_err(|_| {
            invalid_version(kind, original, format!("unknown stage '{}'", stage.as_str()))
        })?,
        None => Stage::Stable,
    };

    Ok((number, stage))
}

/// Writes `<number>` or `<number>-<stage>`.
fn fmt_numbered(f: &mut std::fmt::Formatter<'_>, number: u32, stage: Stage) -> std::fmt::Result {
    if stage.is_stable() {
        write!(f, "{number}")
    } else {
        write!(f, "{number}-{stage}")
    }
}
