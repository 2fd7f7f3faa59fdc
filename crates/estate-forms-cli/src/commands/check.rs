use anyhow::{Context, Result};
use colored::Colorize;
use estate_forms::{record_from_json, ErrorMap, FormValidator, Record};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::OutputFormat;

/// Validate the record file and print the outcome; returns whether it is valid
pub fn execute(schema: &Path, record: &Path, format: OutputFormat) -> Result<bool> {
    let errors = validate_files(schema, record)?;
    render(&mut io::stdout().lock(), record, &errors, format)?;
    Ok(!errors.has_errors())
}

/// Write the outcome of a check in the requested format
pub fn render(
    out: &mut impl Write,
    record: &Path,
    errors: &ErrorMap,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(errors)?)?,
        OutputFormat::Text => write_text(out, record, errors)?,
    }
    Ok(())
}

/// Run full validation of `record` against `schema`
pub fn validate_files(schema: &Path, record: &Path) -> Result<ErrorMap> {
    let schema = super::load_schema(schema)?;
    let record = load_record(record)?;

    let mut form = FormValidator::new(schema);
    form.validate_form(&record);
    Ok(form.errors().clone())
}

fn load_record(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {:?}", path))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file: {:?}", path))?;
    record_from_json(&json).with_context(|| format!("Unsupported record in {:?}", path))
}

fn write_text(out: &mut impl Write, record: &Path, errors: &ErrorMap) -> io::Result<()> {
    if !errors.has_errors() {
        return writeln!(out, "{} {}", "✓".green(), record.display());
    }

    writeln!(out, "{} {}", "✗".red(), record.display())?;
    for (field, message) in errors.iter() {
        writeln!(out, "  {} {}", format!("{}:", field).yellow(), message)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{} field(s) failed validation",
        errors.len().to_string().red().bold()
    )
}
