//! Settings resolution for the CLI.
//!
//! Command-line flags win over the config file, which wins over built-in
//! defaults.

use crate::cli::Cli;
use crate::error::Result;
use sponsor_extractor::ExtractorConfig;
use tracing::debug;

/// Build the extractor configuration from parsed arguments.
pub fn resolve_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ExtractorConfig::from_file(path)?
        }
        None => ExtractorConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.input_path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if let Some(key) = &cli.key {
        config.collection_key = key.clone();
    }
    if let Some(field) = &cli.field {
        config.field = field.clone();
    }

    config.validate()?;
    Ok(config)
}
