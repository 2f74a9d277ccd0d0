//! User configuration loaded from `<config dir>/knot/config.toml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::git::constants::GIT_COMMAND;
use crate::model::DEFAULT_NOTIFICATION_TTL;

/// Errors from reading or validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parse error.
    #[error("configuration parse error: {0}")]
    ParseError(String),

    /// A config value is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    Invalid { field: String, detail: String },

    /// Generic I/O error reading the config file.
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable name or path.
    #[serde(default = "default_git_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_git_program(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Editor command line; falls back to `git var GIT_EDITOR` when unset.
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Minimum tracing level or filter directive (e.g. `info`, `knot=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path. Defaults to `<data dir>/knot/knot.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Seconds a notification stays visible.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_secs: default_notification_secs(),
        }
    }
}

fn default_git_program() -> String {
    GIT_COMMAND.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notification_secs() -> u64 {
    DEFAULT_NOTIFICATION_TTL.as_secs()
}

impl Config {
    /// Default config location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("knot").join("config.toml"))
    }

    /// Load and validate configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => {
                    debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading configuration");

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!("configuration parsed successfully");
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "git.program".into(),
                detail: "git program must not be empty".into(),
            });
        }
        if self
            .editor
            .command
            .as_deref()
            .is_some_and(|cmd| cmd.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                field: "editor.command".into(),
                detail: "editor command must not be empty; remove it to use git's editor".into(),
            });
        }
        if self.ui.notification_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "ui.notification_secs".into(),
                detail: "notification duration must be at least one second".into(),
            });
        }
        Ok(())
    }

    /// Notification lifetime as a [`Duration`]
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.ui.notification_secs)
    }
}
