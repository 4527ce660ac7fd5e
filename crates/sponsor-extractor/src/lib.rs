//! Sponsor Extractor
//!
//! Pulls the distinct set of countries out of an institutions and fellowship
//! sponsors export and writes it as a sorted, newline-terminated list.
//!
//! # Architecture
//!
//! ```text
//! JSON file → parse_document → CountrySet → countries.txt
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use sponsor_extractor::{Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), sponsor_extractor::ExtractorError> {
//! let config = ExtractorConfig {
//!     input_path: "data/sponsors.json".into(),
//!     output_path: "countries.txt".into(),
//!     ..ExtractorConfig::default()
//! };
//!
//! let summary = Extractor::new(config).run()?;
//! println!("Extracted {} countries", summary.countries);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod types;


pub use config::{
    ExtractorConfig, DEFAULT_COLLECTION_KEY, DEFAULT_FIELD, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH,
};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::parse_document;
pub use types::{CountrySet, ExtractionSummary};
