// File: src/config.rs
// Purpose: Schema definitions loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::SchemaError;
use crate::rule::{Rule, Schema};
use crate::validators;

/// Schema file contents
///
/// ```toml
/// [fields.phone]
/// required = true
/// pattern = '^\+\d{7,15}$'
/// message = "Bad phone"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

/// Rule definition for one field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default, alias = "minLength")]
    pub min_length: Option<usize>,

    #[serde(default, alias = "maxLength")]
    pub max_length: Option<usize>,

    /// Name of a built-in predicate used as the custom check
    #[serde(default)]
    pub validator: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl FieldConfig {
    /// Compile into a [`Rule`]
    pub fn to_rule(&self, field: &str) -> Result<Rule, SchemaError> {
        let mut rule = Rule {
            required: self.required,
            min: self.min,
            max: self.max,
            min_length: self.min_length,
            max_length: self.max_length,
            message: self.message.clone(),
            ..Rule::default()
        };

        if let Some(pattern) = &self.pattern {
            rule = rule.pattern(pattern).map_err(|source| SchemaError::InvalidPattern {
                field: field.to_string(),
                source,
            })?;
        }

        if let Some(name) = &self.validator {
            rule.custom = Some(validators::builtin(name).ok_or_else(|| {
                SchemaError::UnknownValidator {
                    field: field.to_string(),
                    name: name.clone(),
                }
            })?);
        }

        Ok(rule)
    }
}

impl SchemaConfig {
    /// Load a schema definition from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse schema file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        // Empty document is an empty schema
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Compile every field definition into a [`Schema`]
    pub fn into_schema(self) -> Result<Schema, SchemaError> {
        self.fields
            .iter()
            .map(|(name, field)| Ok((name.clone(), field.to_rule(name)?)))
            .collect()
    }
}
