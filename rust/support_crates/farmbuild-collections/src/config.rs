//! Diagnostic settings for [`Collections`](crate::Collections).

use farmbuild_common::{Result, error::Error, verify_arg};
use log::Level;
use serde::{Deserialize, Serialize};

/// Level used when a positional removal is rejected.
pub const DEFAULT_VIOLATION_LEVEL: Level = Level::Warn;

/// Level used to trace removals by value.
pub const DEFAULT_REMOVAL_LEVEL: Level = Level::Info;

/// Configuration for the diagnostics emitted by the collection helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionsConfig {
    /// When `false`, no diagnostics are sent to the sink.
    pub enabled: bool,
    /// Level of the message logged when `remove_at` rejects an index
    /// or the input is not a sequence.
    pub violation_level: Level,
    /// Level of the message logged at the start of `remove`.
    pub removal_level: Level,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            violation_level: DEFAULT_VIOLATION_LEVEL,
            removal_level: DEFAULT_REMOVAL_LEVEL,
        }
    }
}

impl CollectionsConfig {
    /// Configuration that emits nothing.
    pub fn silent() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing members take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CollectionsConfig =
            serde_json::from_str(json).map_err(|e| Error::json("collections config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// A rejected removal must be reported at least as severely as the
    /// routine removal trace.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(violation_level, self.violation_level <= self.removal_level);
        Ok(())
    }
}
