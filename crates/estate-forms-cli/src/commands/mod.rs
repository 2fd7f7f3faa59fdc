pub mod check;
pub mod fields;

use anyhow::{Context, Result};
use estate_forms::{Schema, SchemaConfig};
use std::path::Path;

/// Load and compile a schema file
pub fn load_schema(path: &Path) -> Result<Schema> {
    let schema = SchemaConfig::load(path)?
        .into_schema()
        .with_context(|| format!("Invalid schema in {:?}", path))?;
    tracing::debug!(fields = schema.len(), "loaded schema from {:?}", path);
    Ok(schema)
}
