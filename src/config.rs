//! Shell configuration, optionally loaded from a JSON file.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::component::{MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "PARTSBIN_CONFIG";

/// Failures while loading a [`ShellConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io(std::io::Error),
    /// File is not valid JSON for [`ShellConfig`].
    Json(serde_json::Error),
    /// Parsed values are out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config read failed: {err}"),
            Self::Json(err) => write!(f, "config parse failed: {err}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Display and input limits for the interactive shell.
///
/// Defaults keep the two display paths on different currency labels; set
/// `queue_currency` equal to `table_currency` to unify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Characters kept from an entered name.
    pub name_max_len: usize,
    /// Characters kept from an entered description.
    pub description_max_len: usize,
    /// Label before prices in the inventory table.
    pub table_currency: String,
    /// Label before prices in the queue listing.
    pub queue_currency: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name_max_len: MAX_NAME_CHARS,
            description_max_len: MAX_DESCRIPTION_CHARS,
            table_currency: "$".to_string(),
            queue_currency: "Rs".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parses a (possibly partial) JSON document over the defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Loads from [`CONFIG_ENV`] when set, else returns defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name_max_len == 0 {
            return Err(ConfigError::Invalid("name_max_len must be positive".to_string()));
        }
        if self.description_max_len == 0 {
            return Err(ConfigError::Invalid(
                "description_max_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
