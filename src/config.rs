//! Configuration management for the SD file logger
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `SDLOG_*` environment variables (e.g. `SDLOG_ROOT_DIR=/var/log/probe`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::handle::schedule::{DEFAULT_RECORD_DURATION_SECS, DEFAULT_RECORD_FREQUENCY_HZ};

/// Config file looked up in the working directory (extension optional)
pub const DEFAULT_CONFIG_NAME: &str = "sd_logger";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SDLOG";

/// Logger configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Root directory all file paths are resolved against
    pub root_dir: String,

    /// Create the root directory when it does not exist
    pub create_root: bool,

    /// Recorder frequency in Hz; 0 is clamped to 1 by the logger
    pub record_frequency_hz: u16,

    /// How far back, in seconds, the caller keeps records
    pub record_duration_secs: u32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            root_dir: "./".to_string(),
            create_root: true,
            record_frequency_hz: DEFAULT_RECORD_FREQUENCY_HZ,
            record_duration_secs: DEFAULT_RECORD_DURATION_SECS,
        }
    }
}

impl LoggerConfig {
    /// Load `sd_logger.toml` (if present) with environment overrides,
    /// falling back to `default_root` when neither sets `root_dir`
    pub fn load_with_root(default_root: &str) -> Result<Self, ConfigError> {
        Self::build(
            File::with_name(DEFAULT_CONFIG_NAME).required(false),
            default_root.to_string(),
        )
    }

    /// Load an explicit config file with environment overrides. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(
            File::from(path.to_path_buf()).required(true),
            Self::default().root_dir,
        )
    }

    fn build<S>(file: S, default_root: String) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("root_dir", default_root)?
            .set_default("create_root", defaults.create_root)?
            .set_default("record_frequency_hz", i64::from(defaults.record_frequency_hz))?
            .set_default("record_duration_secs", i64::from(defaults.record_duration_secs))?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: LoggerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_dir.trim().is_empty() {
            return Err(ConfigError::Message("root_dir cannot be empty".into()));
        }

        if self.record_duration_secs == 0 {
            return Err(ConfigError::Message(
                "record_duration_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get root directory as PathBuf
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }
}
