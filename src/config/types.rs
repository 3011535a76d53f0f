use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::edition::{ClaritySettings, EditionSettings};

/// Root configuration container.
///
/// Every section is optional in the file; missing sections take their
/// defaults so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Clarity settings a fresh process starts with.
    #[serde(default)]
    pub clarity: ClaritySettings,
    /// Edition schedule a fresh process starts with.
    #[serde(default)]
    pub schedule: EditionSettings,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the starting edition comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// JSON array of stories. Relative paths resolve against the config
    /// file's directory. Unset means the built-in edition.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
