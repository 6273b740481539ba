//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file
//! 3. Pipeline input (`indexFile`)
//! 4. CLI flags
//!
//! Steps 3 and 4 are applied by the CLI layer; this module handles 1 and 2.
//!
//! # Config Location
//!
//! Searched in order:
//! 1. `$HEADERBUMP_CONFIG` if set
//! 2. `headerbump.toml` in the working directory
//!
//! A missing file is not an error.
//!
//! # Example
//!
//! ```no_run
//! use headerbump::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new(".")).unwrap();
//! println!("metadata goes to {}", config.metadata_file());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HEADERBUMP_CONFIG";

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "headerbump.toml";

/// Default metadata output path.
pub const DEFAULT_METADATA_FILE: &str = "./metadata.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file.
    pub file: FileConfig,
    /// Path the file was loaded from, if any.
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for a working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. An explicit `$HEADERBUMP_CONFIG` that does not exist is
    /// a read error; an empty one counts as unset.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_with_override(cwd, std::env::var_os(CONFIG_ENV_VAR))
    }

    fn load_with_override(cwd: &Path, explicit: Option<OsString>) -> Result<Self, ConfigError> {
        if let Some(explicit) = explicit.filter(|v| !v.is_empty()) {
            let path = cwd.join(explicit);
            return Self::load_from(&path);
        }

        let path = cwd.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Path of the loaded config file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Index file from the config, if set.
    pub fn index_file(&self) -> Option<&str> {
        self.file.index_file.as_deref()
    }

    /// Metadata output path.
    pub fn metadata_file(&self) -> &str {
        self.file
            .metadata_file
            .as_deref()
            .unwrap_or(DEFAULT_METADATA_FILE)
    }
}
