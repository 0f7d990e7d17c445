use crate::domain::form_spec::FormSpec;
use crate::error::{FormSpecError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Decodes form spec documents.
///
/// A document is a JSON array of form spec objects. The top-level shape is
/// strict: anything other than an array, or an entry missing its `type` or
/// `fields`, fails the whole document. Inside an entry decoding is lenient:
/// unknown field kinds are dropped and unknown next action kinds decode to
/// their `Unsupported` marker.
pub struct FormSpecReader;

impl FormSpecReader {
    /// Decodes raw document bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Vec<FormSpec>> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    /// Decodes an already parsed document, preserving entry order.
    pub fn from_value(value: &Value) -> Result<Vec<FormSpec>> {
        let entries = value.as_array().ok_or_else(|| {
            FormSpecError::DecodeError(format!(
                "expected an array of form specs, found {}",
                json_kind(value)
            ))
        })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                FormSpec::deserialize(entry)
                    .map_err(|e| FormSpecError::DecodeError(format!("entry {index}: {e}")))
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
