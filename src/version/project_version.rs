//! Project versions (`3`, `3-alpha`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Stage, fmt_numbered, parse_numbered};
use crate::error::{PluginError, Result, invalid_version};

/// Version of the host project format a plugin can operate against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectVersion {
    pub number: u32,
    pub stage: Stage,
}

impl ProjectVersion {
    /// Create a stable project version
    pub fn new(number: u32) -> Self {
        Self {
            number,
            stage: Stage::Stable,
        }
    }

    #[must_use]
    pub fn with_stage(self, stage: Stage) -> Self {
        Self { stage, ..self }
    }

    /// Project version numbers start at 1.
    pub fn validate(&self) -> Result<()> {
        if self.number == 0 {
            return Err(invalid_version(
                "project",
                self.to_string(),
                "version number must be positive",
            ));
        }
        Ok(())
    }

    pub fn is_stable(&self) -> bool {
        self.stage.is_stable()
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_numbered(f, self.number, self.stage)
    }
}

impl FromStr for ProjectVersion {
    type Err = PluginError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (number, stage) = parse_numbered("project", s, s)?;
        let version = Self { number, stage };
        version.validate()?;
        Ok(version)
    }
}

impl Serialize for ProjectVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProjectVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Manifests often write bare numbers (`[3]`) rather than strings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u32),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(raw) => raw.parse().map_err(serde::de::Error::custom),
            Raw::Number(number) => {
                let version = Self::new(number);
                version.validate().map_err(serde::de::Error::custom)?;
                Ok(version)
            }
        }
    }
}
