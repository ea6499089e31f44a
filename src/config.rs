//! Runtime configuration for sessions and the model oracle.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Identifier of the built-in rule-based model.
pub const RULE_BASED_MODEL: &str = "rule_based";

/// How to reach the out-of-process model oracle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Program and leading arguments (e.g. `["python3", "model_predictor.py"]`).
    ///
    /// The oracle subcommand (`info` or `predict ...`) is appended.
    #[serde(default = "default_command")]
    command: Vec<String>,

    /// Upper bound for one oracle call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

#[instrument]
fn default_command() -> Vec<String> {
    let python = if Path::new(".venv/bin/python").exists() {
        ".venv/bin/python"
    } else {
        "python3"
    };
    vec![python.to_string(), "model_predictor.py".to_string()]
}

#[instrument]
fn default_timeout_ms() -> u64 {
    5_000
}

#[instrument]
fn default_model() -> String {
    RULE_BASED_MODEL.to_string()
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    1_000
}

impl OracleConfig {
    /// Creates an oracle configuration from an explicit command.
    #[instrument]
    pub fn new(command: Vec<String>, timeout_ms: u64) -> Self {
        Self {
            command,
            timeout_ms,
        }
    }

    /// Call timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Session-wide configuration, built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model used when the player makes no explicit choice.
    #[serde(default = "default_model")]
    default_model: String,

    /// Pause before the computer plays, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Oracle settings.
    #[serde(default)]
    oracle: OracleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            computer_delay_ms: default_computer_delay_ms(),
            oracle: OracleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(default_model = %config.default_model, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the oracle command.
    pub fn with_oracle_command(mut self, command: Vec<String>) -> Self {
        self.oracle.command = command;
        self
    }

    /// Overrides the computer move delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {}", message)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
