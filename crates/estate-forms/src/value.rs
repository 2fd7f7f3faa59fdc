// File: src/value.rs
// Purpose: Field values and candidate records

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SchemaError;

/// Candidate data for one form, keyed by field name
///
/// A key missing from the record reads as [`FieldValue::Empty`].
pub type Record = BTreeMap<String, FieldValue>;

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    #[default]
    Empty,
}

impl FieldValue {
    /// True for `Empty` and for values whose string form is blank
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Convert a JSON scalar into a field value
    ///
    /// Arrays and objects have no field representation and are rejected.
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self, SchemaError> {
        match value {
            serde_json::Value::Null => Ok(FieldValue::Empty),
            serde_json::Value::Bool(b) => Ok(FieldValue::Flag(*b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .ok_or_else(|| SchemaError::UnsupportedValue {
                    field: field.to_string(),
                    kind: "number",
                }),
            serde_json::Value::String(s) => Ok(FieldValue::Text(s.clone())),
            serde_json::Value::Array(_) => Err(SchemaError::UnsupportedValue {
                field: field.to_string(),
                kind: "array",
            }),
            serde_json::Value::Object(_) => Err(SchemaError::UnsupportedValue {
                field: field.to_string(),
                kind: "object",
            }),
        }
    }
}

/// Format a number the way form inputs display it
///
/// Integral values print without a fraction (`18`, not `18.0`); magnitudes
/// below `1e-6` or from `1e21` up switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => f.write_str(&format_number(*n)),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

/// Build a [`Record`] from a JSON object
pub fn record_from_json(json: &serde_json::Value) -> Result<Record, SchemaError> {
    let object = json.as_object().ok_or(SchemaError::NotAnObject)?;
    object
        .iter()
        .map(|(field, value)| Ok((field.clone(), FieldValue::from_json(field, value)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_display_matches_input_formatting() {
        assert_eq!(FieldValue::from(18).to_string(), "18");
        assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::from(true).to_string(), "true");
        assert_eq!(FieldValue::Empty.to_string(), "");
    }

    #[rstest]
    #[case(18.0, "18")]
    #[case(-0.0, "0")]
    #[case(0.5, "0.5")]
    #[case(1e20, "100000000000000000000")]
    #[case(1e21, "1e+21")]
    #[case(1.5e21, "1.5e+21")]
    #[case(1e-7, "1e-7")]
    #[case(0.000001, "0.000001")]
    #[case(0.0000005, "5e-7")]
    #[case(-2.5e-8, "-2.5e-8")]
    #[case(f64::NAN, "NaN")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn test_format_number(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(FieldValue::from(42).as_number(), Some(42.0));
        assert_eq!(FieldValue::from("42").as_number(), None);
        assert_eq!(FieldValue::from("42").as_text(), Some("42"));
        assert_eq!(FieldValue::Empty.as_text(), None);
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::from("   ").is_blank());
        assert!(!FieldValue::from("a").is_blank());
        assert!(!FieldValue::from(0).is_blank());
        assert!(!FieldValue::from(false).is_blank());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(None::<i32>), FieldValue::Empty);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
    }

    #[test]
    fn test_record_from_json() {
        let record = record_from_json(&json!({
            "phone": "+99293312345",
            "age": 30,
            "agree": true,
            "note": null
        }))
        .unwrap();

        assert_eq!(record["phone"], FieldValue::from("+99293312345"));
        assert_eq!(record["age"], FieldValue::Number(30.0));
        assert_eq!(record["agree"], FieldValue::Flag(true));
        assert_eq!(record["note"], FieldValue::Empty);
    }

    #[test]
    fn test_record_from_json_rejects_nested() {
        let err = record_from_json(&json!({ "tags": ["a"] })).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedValue { kind: "array", .. }));

        assert!(matches!(
            record_from_json(&json!([1, 2])),
            Err(SchemaError::NotAnObject)
        ));
    }
}
