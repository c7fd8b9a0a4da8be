//! Application configuration, read from a TOML file.
//!
//! Every section and key is optional; anything left out takes its default.
//!
//! ```toml
//! theme = "dark"
//!
//! [window]
//! width = 720.0
//! height = 640.0
//!
//! [logging]
//! level = "info,funnel_core=debug"
//! stdout = true
//! directory = "logs"
//!
//! [input]
//! policy = "strict"   # or "lenient"
//! ```

use std::path::{Path, PathBuf};

use funnel_core::NumericPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sales-funnel.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemePreference,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub input: InputConfig,
}

/// Colour scheme requested for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    /// Follow the desktop setting.
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Whether log records are echoed to stdout.
    pub stdout: bool,
    /// Directory for the log file; no file logging when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// How field text that is not a clean number is treated.
    pub policy: NumericPolicy,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given (it must exist). Otherwise loads
    /// [`DEFAULT_CONFIG_FILE`] if present, or falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
