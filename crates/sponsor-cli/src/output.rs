//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use sponsor_extractor::ExtractionSummary;

/// Summary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single human-readable line
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the summary of a finished run.
    pub fn format_summary(&self, summary: &ExtractionSummary) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.success(&format!(
                "Extracted {} countries and saved to {}",
                summary.countries,
                summary.output.display()
            ))),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        let text = format!("✓ {}", message);
        if self.color_enabled {
            text.green().to_string()
        } else {
            text
        }
    }

    /// Format an error message for stderr. Always plain, since stderr may be
    /// redirected while stdout is a terminal.
    pub fn error(&self, message: &str) -> String {
        format!("Error: {}", message)
    }
}
