//! Dynamic encoding of runtime-shaped values.
//!
//! The typed path fixes a record's shape at compile time through the
//! `Record` derive. This module covers data whose shape is only known at
//! runtime: a [`serde_json::Value`] array of objects, or anything
//! `Serialize` via the [`encode_serialize`](Encoder::encode_serialize)
//! bridge. Kind validation that the derive performs at compile time happens
//! here at runtime instead.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::encoder::Encoder;
use crate::error::{EncodeError, Result};

impl<W: Write> Encoder<W> {
    /// Encodes a JSON array of objects as delimited text.
    ///
    /// The top-level value must be an array
    /// ([`UnsupportedInput`](EncodeError::UnsupportedInput) otherwise) and
    /// its first element an object
    /// ([`UnsupportedElement`](EncodeError::UnsupportedElement) otherwise).
    /// The column list is the first object's keys, in insertion order; only
    /// the first element's kind is ever checked. Later elements are looked
    /// up against that column list: absent keys, and elements that are not
    /// objects at all, render as empty cells, so the row count always
    /// matches the input length.
    ///
    /// Cell policy per value kind: null renders empty, strings render
    /// verbatim, booleans and numbers render with their display form, and
    /// nested arrays or objects render as compact JSON.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        let rows = match value {
            Value::Array(rows) => rows,
            other => {
                return Err(EncodeError::UnsupportedInput {
                    kind: value_kind(other),
                })
            }
        };

        let first = match rows.first() {
            Some(first) => first,
            None => {
                self.writer.flush()?;
                return Ok(());
            }
        };
        let columns: Vec<&str> = match first {
            Value::Object(obj) => obj.keys().map(String::as_str).collect(),
            other => {
                return Err(EncodeError::UnsupportedElement {
                    kind: value_kind(other),
                })
            }
        };

        if !self.skip_header {
            self.writer.write_record(&columns)?;
        }

        for row in rows {
            let cells: Vec<String> = match row {
                Value::Object(obj) => columns
                    .iter()
                    .map(|key| obj.get(*key).map(cell_text).unwrap_or_default())
                    .collect(),
                _ => vec![String::new(); columns.len()],
            };
            self.writer.write_record(&cells)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Encodes any serializable collection by converting it to a JSON value
    /// first, then encoding through [`encode_value`](Encoder::encode_value).
    pub fn encode_serialize<T: Serialize>(&mut self, records: &T) -> Result<()> {
        let value = serde_json::to_value(records)?;
        self.encode_value(&value)
    }
}

/// Names a JSON value's kind for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a JSON value to its cell text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_kind_names_every_variant() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "bool");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }

    #[test]
    fn cell_text_renders_strings_verbatim_and_null_empty() {
        assert_eq!(cell_text(&json!("a,b")), "a,b");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(false)), "false");
    }

    #[test]
    fn cell_text_renders_composites_as_compact_json() {
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
        assert_eq!(cell_text(&json!({"k": "v"})), "{\"k\":\"v\"}");
    }
}
