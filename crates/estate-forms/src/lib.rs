//! # estate-forms
//!
//! Declarative form validation for the marketplace frontend.
//!
//! A [`Schema`] maps field names to [`Rule`]s. A [`FormValidator`] owns the
//! [`ErrorMap`] of one form session and updates it on full validation
//! ([`FormValidator::validate_form`]) or per-field edits
//! ([`FormValidator::validate_single_field`]).
//!
//! ```
//! use estate_forms::{FieldValue, FormValidator, Rule, Schema};
//!
//! let schema = Schema::new()
//!     .field_with_pattern("phone", Rule::new().required().message("Bad phone"), r"^\+\d{7,15}$")
//!     .unwrap();
//! let mut form = FormValidator::new(schema);
//!
//! assert!(!form.validate_single_field("phone", &FieldValue::from("12345")));
//! assert_eq!(form.error("phone"), Some("Bad phone"));
//! ```
//!
//! Alongside the engine:
//!
//! - [`config`] - schema definitions loaded from TOML
//! - [`validators`] - named predicates (email, phone, url, ...) for custom checks
//! - [`steps`] - multi-step form position tracking
//! - [`dirty`] - unsaved-changes detection

pub mod config;
pub mod dirty;
pub mod engine;
pub mod error;
pub mod rule;
pub mod steps;
pub mod validators;
pub mod value;

pub use config::{FieldConfig, SchemaConfig};
pub use dirty::ChangeTracker;
pub use engine::{ErrorMap, FormValidator};
pub use error::{FailureKind, FieldFailure, SchemaError, StepError};
pub use rule::{Predicate, Rule, Schema};
pub use steps::{Step, StepTracker};
pub use value::{record_from_json, FieldValue, Record};
