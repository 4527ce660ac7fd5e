//! Country set and extraction summary types

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Distinct field values in ascending byte order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySet {
    values: BTreeSet<String>,
}

impl CountrySet {
    /// Build a set, collapsing exact duplicates
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were collected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the set holds `value` (exact match)
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Values in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Render as the output document: one value per line, each newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.values.iter().map(|v| v.len() + 1).sum());
        for value in &self.values {
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl FromIterator<String> for CountrySet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    /// Distinct values written
    pub countries: usize,

    /// Records scanned in the input
    pub records: usize,

    /// Where the output was written
    pub output: PathBuf,
}
