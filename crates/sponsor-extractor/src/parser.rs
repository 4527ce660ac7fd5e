//! Parse the input document into field values

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use serde_json::Value;
use tracing::debug;

/// Parse a JSON document and project the configured field from every record.
///
/// Values come back in record order, duplicates included. The first record
/// without a string-valued field fails the whole document.
pub fn parse_document(
    document: &str,
    config: &ExtractorConfig,
) -> Result<Vec<String>, ExtractorError> {
    let json: Value = serde_json::from_str(document)?;

    let records = json
        .get(&config.collection_key)
        .ok_or_else(|| ExtractorError::MissingKey(config.collection_key.clone()))?
        .as_array()
        .ok_or_else(|| ExtractorError::NotASequence(config.collection_key.clone()))?;

    debug!("Found {} records under '{}'", records.len(), config.collection_key);

    records
        .iter()
        .enumerate()
        .map(|(index, record)| field_value(record, index, &config.field))
        .collect()
}

fn field_value(record: &Value, index: usize, field: &str) -> Result<String, ExtractorError> {
    let value = record
        .as_object()
        .and_then(|obj| obj.get(field))
        .ok_or_else(|| ExtractorError::MissingField {
            index,
            field: field.to_string(),
        })?;

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ExtractorError::FieldNotString {
            index,
            field: field.to_string(),
        })
}
