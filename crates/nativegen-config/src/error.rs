//! Configuration errors

use thiserror::Error;

/// Errors that can occur while loading overrides or project config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// An override value with no usable fields
    #[error("Malformed override on line {line}: {key} = '{value}'")]
    MalformedOverride {
        /// Line the entry starts on (1-based)
        line: usize,
        /// Class name the entry is keyed by
        key: String,
        /// Raw value
        value: String,
    },

    /// An override keyed by something that is not a class name
    #[error("Invalid class name on line {line}: '{name}'")]
    InvalidClassName {
        /// Line the entry starts on (1-based)
        line: usize,
        /// Offending key
        name: String,
    },

    /// A `\u` escape without four hex digits
    #[error("Malformed escape on line {line}: '{escape}'")]
    MalformedEscape {
        /// Line the entry starts on (1-based)
        line: usize,
        /// The escape as written
        escape: String,
    },

    /// Failed to parse TOML
    #[error("Failed to parse project config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid project config: {0}")]
    ValidationError(String),
}
