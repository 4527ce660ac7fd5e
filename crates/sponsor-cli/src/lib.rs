//! Sponsor countries CLI library.
//!
//! Argument parsing, settings resolution, logging setup and summary
//! formatting for the `sponsor-countries` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use config::resolve_config;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
