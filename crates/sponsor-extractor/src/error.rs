//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level collection key is absent
    #[error("Missing top-level key '{0}'")]
    MissingKey(String),

    /// Top-level collection key does not hold an array
    #[error("Key '{0}' does not hold an array of records")]
    NotASequence(String),

    /// A record lacks the configured field
    #[error("Record {index} has no '{field}' field")]
    MissingField {
        /// Position of the record in the array
        index: usize,
        /// Name of the missing field
        field: String,
    },

    /// A record's field holds something other than a string
    #[error("Record {index} has a non-string '{field}' field")]
    FieldNotString {
        /// Position of the record in the array
        index: usize,
        /// Name of the offending field
        field: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ExtractorError {
    /// Whether the input was valid JSON but did not have the expected shape
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ExtractorError::MissingKey(_)
                | ExtractorError::NotASequence(_)
                | ExtractorError::MissingField { .. }
                | ExtractorError::FieldNotString { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            path: path.into(),
            source,
        }
    }
}
