//! Plugin versions (`v4`, `v2-alpha`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Stage, fmt_numbered, parse_numbered};
use crate::error::{PluginError, invalid_version};

/// Version of a plugin or bundle
///
/// The default value is `v0`, which is what a bundle gets when no version
/// option is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PluginVersion {
    pub number: u32,
    pub stage: Stage,
}

impl PluginVersion {
    /// Create a stable version
    pub fn new(number: u32) -> Self {
        Self {
            number,
            stage: Stage::Stable,
        }
    }

    /// Same number, different stage
    #[must_use]
    pub fn with_stage(self, stage: Stage) -> Self {
        Self { stage, ..self }
    }

    /// Version 0 is never considered stable.
    pub fn is_stable(&self) -> bool {
        self.number > 0 && self.stage.is_stable()
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v")?;
        fmt_numbered(f, self.number, self.stage)
    }
}

impl FromStr for PluginVersion {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('v')
            .ok_or_else(|| invalid_version("plugin", s, "missing 'v' prefix"))?;
        let (number, stage) = parse_numbered("plugin", s, body)?;
        Ok(Self { number, stage })
    }
}

impl Serialize for PluginVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PluginVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
