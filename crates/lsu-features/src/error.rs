//! Feature configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a feature configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON was malformed or had a field of the wrong type.
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A non-blank format string lacks a placeholder it cannot work without.
    #[error("Format '{field}' must contain {placeholder}")]
    MissingPlaceholder {
        field: &'static str,
        placeholder: &'static str,
    },

    /// A required text option is blank.
    #[error("Option '{field}' must not be blank")]
    Blank { field: &'static str },

    /// A numeric option is outside its accepted range.
    #[error("Option '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}
