//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Extract the sorted, distinct list of countries from a sponsors export.
#[derive(Debug, Parser)]
#[command(name = "sponsor-countries")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output text file (overwritten)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "SPONSOR_COUNTRIES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Top-level key holding the records
    #[arg(short, long)]
    pub key: Option<String>,

    /// Field read from every record
    #[arg(long)]
    pub field: Option<String>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Summary format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable line (default)
    Text,
    /// JSON object
    Json,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::output::OutputFormat::Text,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
