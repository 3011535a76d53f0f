use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;
use crate::edition::{seed_stories, Story};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Errors that can occur when loading configuration or the seed edition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read seed file '{path}': {source}")]
    SeedReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    SeedParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/claritynews/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("claritynews").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise parse as TOML, resolve the seed path, validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let (Some(seed), Some(dir)) = (config.seed.path.as_mut(), path.parent()) {
            if seed.is_relative() {
                *seed = dir.join(&*seed);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that the logging level is one `tracing` understands.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown logging level '{}' (expected one of: {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Stories the store starts with: the seed file if configured,
    /// otherwise the built-in edition.
    pub fn load_stories(&self) -> Result<Vec<Story>, ConfigError> {
        let Some(path) = &self.seed.path else {
            return Ok(seed_stories());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::SeedReadError {
            path: path.clone(),
            source: e,
        })?;

        let stories: Vec<Story> =
            serde_json::from_str(&content).map_err(|e| ConfigError::SeedParseError {
                path: path.clone(),
                source: e,
            })?;

        validate_stories(&stories)?;
        tracing::info!(path = %path.display(), count = stories.len(), "Loaded seed edition");
        Ok(stories)
    }
}

/// Seed stories must be non-empty with unique, non-blank ids.
fn validate_stories(stories: &[Story]) -> Result<(), ConfigError> {
    if stories.is_empty() {
        return Err(ConfigError::ValidationError {
            message: "Seed edition contains no stories".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for story in stories {
        if story.id.as_str().trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!("Story '{}' has an empty id", story.headline),
            });
        }
        if !seen.insert(&story.id) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate story id '{}' in seed edition", story.id),
            });
        }
    }
    Ok(())
}
