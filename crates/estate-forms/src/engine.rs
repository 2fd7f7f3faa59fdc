// File: src/engine.rs
// Purpose: Validation session that owns a form's current error map

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{FailureKind, FieldFailure};
use crate::rule::{Rule, Schema};
use crate::value::{format_number, FieldValue, Record};

static EMPTY: FieldValue = FieldValue::Empty;

/// Current failures of a form, keyed by field name
///
/// Only failing fields have an entry; a field that passes is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one entry carries a non-empty message
    pub fn has_errors(&self) -> bool {
        self.0.values().any(|message| !message.is_empty())
    }

    fn set(&mut self, field: &str, message: String) {
        self.0.insert(field.to_string(), message);
    }

    fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validation session for one form
///
/// Holds a shared, read-only [`Schema`] and the [`ErrorMap`] produced by the
/// latest full or incremental validation.
///
/// # Example
///
/// ```
/// use estate_forms::{FieldValue, FormValidator, Record, Rule, Schema};
///
/// let schema = Schema::new().field("age", Rule::new().min(18.0).max(65.0));
/// let mut form = FormValidator::new(schema);
///
/// let mut record = Record::new();
/// record.insert("age".into(), FieldValue::from(10));
///
/// assert!(!form.validate_form(&record));
/// assert_eq!(form.error("age"), Some("age must be at least 18"));
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    schema: Arc<Schema>,
    errors: ErrorMap,
}

impl FormValidator {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
            errors: ErrorMap::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Check one field and return the structured failure, if any
    ///
    /// Fields without a rule always pass. Does not touch the error map.
    pub fn check_field(&self, name: &str, value: &FieldValue) -> Option<FieldFailure> {
        let rule = self.schema.get(name)?;
        let kind = evaluate(rule, value)?;
        let message = rule
            .message
            .clone()
            .unwrap_or_else(|| default_message(name, rule, kind));
        tracing::trace!(field = name, %kind, "field failed validation");
        Some(FieldFailure {
            field: name.to_string(),
            kind,
            message,
        })
    }

    /// Check one field and return its failure message, if any
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> Option<String> {
        self.check_field(name, value).map(|failure| failure.message)
    }

    /// Validate every field of the schema and replace the error map
    ///
    /// Record keys that have no rule are ignored; schema fields missing from
    /// the record are validated as empty.
    pub fn validate_form(&mut self, record: &Record) -> bool {
        let mut errors = ErrorMap::new();
        for name in self.schema.names() {
            let value = record.get(name).unwrap_or(&EMPTY);
            if let Some(message) = self.validate_field(name, value) {
                errors.set(name, message);
            }
        }

        tracing::debug!(
            fields = self.schema.len(),
            failed = errors.len(),
            "validated form"
        );

        self.errors = errors;
        !self.errors.has_errors()
    }

    /// Validate one field and patch only its entry in the error map
    pub fn validate_single_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match self.validate_field(name, value) {
            Some(message) => {
                self.errors.set(name, message);
                false
            }
            None => {
                self.errors.remove(name);
                true
            }
        }
    }

    /// Incrementally validate a subset of fields from a record
    ///
    /// Every named field is checked (no early exit) so all of their entries
    /// are refreshed; entries of other fields stay as they are.
    pub fn validate_fields<'a, I>(&mut self, names: I, record: &Record) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut valid = true;
        for name in names {
            let value = record.get(name).unwrap_or(&EMPTY);
            valid &= self.validate_single_field(name, value);
        }
        valid
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn clear_field_error(&mut self, name: &str) {
        self.errors.remove(name);
    }
}

/// Run the checks of `rule` in precedence order; the first failure wins
fn evaluate(rule: &Rule, value: &FieldValue) -> Option<FailureKind> {
    if value.is_blank() {
        // Optional and blank: nothing else applies
        return rule.required.then_some(FailureKind::Required);
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(&value.to_string()) {
            return Some(FailureKind::Pattern);
        }
    }

    match value {
        FieldValue::Number(n) => {
            if rule.min.is_some_and(|min| *n < min) {
                return Some(FailureKind::Min);
            }
            if rule.max.is_some_and(|max| *n > max) {
                return Some(FailureKind::Max);
            }
        }
        FieldValue::Text(s) => {
            // Counted in UTF-16 units, as browsers report input length
            let len = s.encode_utf16().count();
            if rule.min_length.is_some_and(|min| len < min) {
                return Some(FailureKind::MinLength);
            }
            if rule.max_length.is_some_and(|max| len > max) {
                return Some(FailureKind::MaxLength);
            }
        }
        FieldValue::Flag(_) | FieldValue::Empty => {}
    }

    match &rule.custom {
        Some(custom) if !custom(value) => Some(FailureKind::Custom),
        _ => None,
    }
}

fn default_message(name: &str, rule: &Rule, kind: FailureKind) -> String {
    let bound = |n: Option<f64>| n.map(format_number).unwrap_or_default();
    let length = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();

    match kind {
        FailureKind::Required => format!("{} is required", name),
        FailureKind::Pattern => format!("{} format is invalid", name),
        FailureKind::Min => format!("{} must be at least {}", name, bound(rule.min)),
        FailureKind::Max => format!("{} must be at most {}", name, bound(rule.max)),
        FailureKind::MinLength => {
            format!("{} must be at least {} characters", name, length(rule.min_length))
        }
        FailureKind::MaxLength => {
            format!("{} must be at most {} characters", name, length(rule.max_length))
        }
        FailureKind::Custom => format!("{} is invalid", name),
    }
}
