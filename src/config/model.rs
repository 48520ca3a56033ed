use serde::{Deserialize, Serialize};

use crate::model::Severity;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Lowest severity that makes a submission invalid.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
        }
    }
}

/// Contents of a `--config` TOML file.
///
/// The failure threshold is the only tunable; which files are scanned and
/// which stage applies come from the command line alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub validation: ValidationConfig,
}

const fn default_fail_on() -> Severity {
    Severity::Critical
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
