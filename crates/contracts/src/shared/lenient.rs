//! Tolerant field deserializers.
//!
//! The backend serialises rows straight out of the warehouse, so the same
//! column can arrive as a number in one response and as a string (or null) in
//! the next. These helpers accept whatever shows up and never fail the whole
//! record because of a single odd cell.
//!
//! Use together with `#[serde(default)]` so that absent keys become `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any scalar as text. `null` becomes `None`, numbers and booleans are
/// rendered with their JSON spelling.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Numbers and numeric strings as `f64`. Anything else becomes `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Numeric view of a JSON value, used by the deserializer above and by code
/// that works on untyped rows.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "text")]
        id: Option<String>,
        #[serde(default, deserialize_with = "number")]
        amount: Option<f64>,
    }

    #[test]
    fn text_accepts_numbers_and_null() {
        let row: Row = serde_json::from_str(r#"{"id": 10234, "amount": null}"#).unwrap();
        assert_eq!(row.id.as_deref(), Some("10234"));
        assert_eq!(row.amount, None);

        let row: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(row.id, None);
    }

    #[test]
    fn number_accepts_numeric_strings_only() {
        let row: Row = serde_json::from_str(r#"{"amount": " 12.5 "}"#).unwrap();
        assert_eq!(row.amount, Some(12.5));

        let row: Row = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();
        assert_eq!(row.amount, None);

        let row: Row = serde_json::from_str(r#"{"amount": true}"#).unwrap();
        assert_eq!(row.amount, None);
    }

    #[test]
    fn missing_keys_default_to_none() {
        let row: Row = serde_json::from_str("{}").unwrap();
        assert!(row.id.is_none());
        assert!(row.amount.is_none());
    }
}
