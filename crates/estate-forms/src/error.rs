// File: src/error.rs
// Purpose: Validation failures and schema construction errors

use serde::Serialize;
use std::fmt;

/// Which check rejected a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    Required,
    Pattern,
    Min,
    Max,
    MinLength,
    MaxLength,
    Custom,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Required => "required",
            FailureKind::Pattern => "pattern",
            FailureKind::Min => "min",
            FailureKind::Max => "max",
            FailureKind::MinLength => "minLength",
            FailureKind::MaxLength => "maxLength",
            FailureKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors raised while building a schema or reading a record
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown validator `{name}` for field `{field}`")]
    UnknownValidator { field: String, name: String },

    #[error("field `{field}` has an unsupported {kind} value")]
    UnsupportedValue { field: String, kind: &'static str },

    #[error("record must be a JSON object")]
    NotAnObject,
}

/// Errors raised by multi-step navigation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("a multi-step form needs at least one step")]
    Empty,

    #[error("step {index} is out of range ({len} steps)")]
    OutOfRange { index: usize, len: usize },
}
