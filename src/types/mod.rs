//! Record representation and value rendering.
//!
//! Records arrive from billing callers as JSON rows: a mapping from column
//! key to arbitrary scalar value. Column order is dictated entirely by the
//! header list of the request, never by the record itself.

pub mod format;

pub use format::{format_currency, format_date, format_date_time};

use serde_json::Value;

/// A single tabular record: a mapping from column key to scalar value.
pub type Record = serde_json::Map<String, Value>;

/// Builds a [`Record`] from a JSON object literal.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tabex_rs::types::record;
///
/// let row = record(json!({"name": "Jane Doe", "amount": 100}));
/// assert_eq!(row.len(), 2);
/// ```
///
/// # Panics
///
/// Panics if `value` is not a JSON object. Intended for literal
/// construction; callers holding untrusted values should match on the
/// `Value` themselves.
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record() requires a JSON object, got {other}"),
    }
}

/// Renders a scalar value to its cell text.
///
/// Absent and null values become the empty string, strings are taken
/// verbatim, numbers and booleans use their canonical display form, and
/// nested arrays/objects render as compact JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_absent_and_null() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&Value::Null)), "");
    }

    #[test]
    fn test_cell_text_scalars() {
        assert_eq!(cell_text(Some(&json!("Jane"))), "Jane");
        assert_eq!(cell_text(Some(&json!(100))), "100");
        assert_eq!(cell_text(Some(&json!(99.5))), "99.5");
        assert_eq!(cell_text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_cell_text_nested_values_render_as_json() {
        assert_eq!(cell_text(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(cell_text(Some(&json!({"a": 1}))), "{\"a\":1}");
    }

    #[test]
    fn test_record_from_object() {
        let row = record(json!({"id": 1}));
        assert_eq!(row.get("id"), Some(&json!(1)));
    }

    #[test]
    #[should_panic(expected = "requires a JSON object")]
    fn test_record_rejects_non_object() {
        record(json!([1, 2, 3]));
    }
}
