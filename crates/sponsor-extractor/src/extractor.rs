//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_document;
use crate::types::{CountrySet, ExtractionSummary};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info};

/// The Extractor turns a sponsors export into a sorted list of distinct countries
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read, extract and write in one pass.
    ///
    /// The output file is only touched once extraction has fully succeeded.
    pub fn run(&self) -> Result<ExtractionSummary, ExtractorError> {
        self.config.validate()?;

        info!(
            "Extracting '{}' values from {}",
            self.config.field,
            self.config.input_path.display()
        );

        let (countries, records) = self.extract()?;
        self.write(&countries)?;

        info!(
            "Wrote {} distinct values from {} records to {}",
            countries.len(),
            records,
            self.config.output_path.display()
        );

        Ok(ExtractionSummary {
            countries: countries.len(),
            records,
            output: self.config.output_path.clone(),
        })
    }

    /// Read the input and build the distinct set, without writing anything.
    ///
    /// Returns the set along with the number of records scanned.
    pub fn extract(&self) -> Result<(CountrySet, usize), ExtractorError> {
        let path = &self.config.input_path;
        let document = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractorError::InputNotFound(path.clone()),
            _ => ExtractorError::io(path, e),
        })?;

        debug!("Read {} bytes from {}", document.len(), path.display());

        let values = parse_document(&document, &self.config)?;
        let records = values.len();
        let countries = CountrySet::from_values(values);

        debug!("{} records collapsed to {} distinct values", records, countries.len());

        Ok((countries, records))
    }

    /// Write the set to the configured output, replacing any existing file
    pub fn write(&self, countries: &CountrySet) -> Result<(), ExtractorError> {
        let path = &self.config.output_path;
        let rendered = countries.render();
        fs::write(path, &rendered).map_err(|e| ExtractorError::io(path, e))?;

        debug!("Wrote {} bytes to {}", rendered.len(), path.display());
        Ok(())
    }
}
