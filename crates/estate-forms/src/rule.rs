// File: src/rule.rs
// Purpose: Per-field rules and the schema that groups them

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::SchemaError;
use crate::value::FieldValue;

/// Custom check over a field value, returning `true` when the value is acceptable
pub type Predicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Constraints attached to one field
///
/// Every constraint is optional. `message` replaces the default text of
/// whichever check fails.
#[derive(Clone, Default)]
pub struct Rule {
    pub required: bool,
    pub pattern: Option<Regex>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub custom: Option<Predicate>,
    pub message: Option<String>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a pattern, compiling it first
    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.regex(Regex::new(pattern)?))
    }

    pub fn regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("required", &self.required)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("min", &self.min)
            .field("max", &self.max)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

/// The fixed set of named rules for a form
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: BTreeMap<String, Rule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rule for a field
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Like [`Schema::field`], compiling `pattern` on the way in
    pub fn field_with_pattern(
        self,
        name: impl Into<String>,
        rule: Rule,
        pattern: &str,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let rule = rule.pattern(pattern).map_err(|source| SchemaError::InvalidPattern {
            field: name.clone(),
            source,
        })?;
        Ok(self.field(name, rule))
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, Rule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
