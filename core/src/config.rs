//! Parser configuration.
//!
//! A [`ParserConfig`] travels with its [`Specification`](crate::Specification)
//! and tunes query behavior and where help text is written. It can be
//! embedded in code or loaded from YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! enforce_parameter_patterns: true
//! help_stream: stderr
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output stream that receives printed help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HelpStream {
    /// Standard output (the default).
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

/// Query and output settings for a specification.
///
/// # Examples
///
/// ```
/// use argspec_core::{HelpStream, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert!(!config.enforce_parameter_patterns);
/// assert_eq!(config.help_stream, HelpStream::Stdout);
///
/// let config = ParserConfig::from_yaml_str("enforce_parameter_patterns: true").unwrap();
/// assert!(config.enforce_parameter_patterns);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Reject option parameters that do not fully match the option's
    /// declared pattern. Off by default: patterns are only recorded.
    pub enforce_parameter_patterns: bool,
    /// Stream used by [`print_help`](crate::sink::print_help) when the
    /// caller does not pick one.
    pub help_stream: HelpStream,
}

impl ParserConfig {
    /// Parses configuration from a YAML document. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be written, or
    /// [`ConfigError::Yaml`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
