//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing: paths, when present, must not be
//! blank.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of `headerbump.toml`.
///
/// # Example
///
/// ```toml
/// index_file = "my-plugin.php"
/// metadata_file = "build/metadata.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Index file used when neither the CLI nor the pipeline supplies one.
    pub index_file: Option<String>,

    /// Where the metadata JSON is written.
    pub metadata_file: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = &self.index_file {
            if index.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "index_file cannot be empty".into(),
                ));
            }
        }

        if let Some(metadata) = &self.metadata_file {
            if metadata.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "metadata_file cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: FileConfig =
            toml::from_str("index_file = \"demo.php\"\nmetadata_file = \"out/meta.json\"").unwrap();
        assert_eq!(config.index_file.as_deref(), Some("demo.php"));
        assert_eq!(config.metadata_file.as_deref(), Some("out/meta.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("index = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn blank_values_rejected() {
        let config = FileConfig {
            index_file: Some("  ".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FileConfig {
            metadata_file: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
