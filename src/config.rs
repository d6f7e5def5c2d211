//! Scheme selection.
//!
//! The crate never reads files; callers hand over a `Config` value, either
//! built in code or parsed from TOML text with `Config::from_toml_str`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a registry does when a name is registered a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The latest registration wins
    #[default]
    Replace,
    /// The second registration fails with `Error::DuplicateScheme`
    Reject,
}

/// Selects the active partition scheme at each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mechanism/purview partition scheme (`BI`, `TRI`, `ALL`, or user-registered)
    pub partition_type: String,
    /// Relation partition scheme (`TRI`, `BI_CUT_ONE`, or user-registered)
    pub relation_partition_type: String,
    /// Whole-system cut scheme (`DIRECTED_BI`, `GENERAL`, ...)
    pub system_partition_type: String,
    /// Policy applied by the process-wide registries on re-registration
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            partition_type: "BI".to_owned(),
            relation_partition_type: "TRI".to_owned(),
            system_partition_type: "DIRECTED_BI".to_owned(),
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Config> {
        Ok(toml::from_str(s)?)
    }

    /// Return a copy with a different mechanism/purview scheme.
    pub fn with_partition_type(mut self, name: impl Into<String>) -> Self {
        self.partition_type = name.into();
        self
    }

    /// Return a copy with a different system cut scheme.
    pub fn with_system_partition_type(mut self, name: impl Into<String>) -> Self {
        self.system_partition_type = name.into();
        self
    }

    /// Return a copy with a different relation scheme.
    pub fn with_relation_partition_type(mut self, name: impl Into<String>) -> Self {
        self.relation_partition_type = name.into();
        self
    }
}
