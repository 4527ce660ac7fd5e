//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input document, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str =
    "../json_results_from_browser/institutions_and_fellowship_sponsors.json";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "./countries.txt";

/// Default top-level key holding the records
pub const DEFAULT_COLLECTION_KEY: &str = "institutions_and_fellowship_sponsors";

/// Default per-record field to project
pub const DEFAULT_FIELD: &str = "Country";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// JSON document to read
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Text file to write
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Top-level key whose value is the array of records
    #[serde(default = "default_collection_key")]
    pub collection_key: String,

    /// Field read from every record
    #[serde(default = "default_field")]
    pub field: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ExtractorError::Config("input_path must not be empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ExtractorError::Config("output_path must not be empty".to_string()));
        }
        if self.collection_key.is_empty() {
            return Err(ExtractorError::Config("collection_key must not be empty".to_string()));
        }
        if self.field.is_empty() {
            return Err(ExtractorError::Config("field must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))?;
        Self::from_toml(&contents)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            collection_key: default_collection_key(),
            field: default_field(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_collection_key() -> String {
    DEFAULT_COLLECTION_KEY.to_string()
}

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}
