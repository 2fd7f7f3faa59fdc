use anyhow::Result;
use colored::Colorize;
use estate_forms::value::format_number;
use estate_forms::Rule;
use std::path::Path;

/// Print each schema field with its constraints
pub fn execute(schema: &Path) -> Result<()> {
    let schema = super::load_schema(schema)?;

    println!("{}", format!("{} field(s)", schema.len()).green().bold());
    for (name, rule) in schema.iter() {
        let constraints = describe(rule);
        if constraints.is_empty() {
            println!("  {}", name.cyan());
        } else {
            println!("  {} {}", name.cyan(), constraints.join(", "));
        }
    }

    Ok(())
}

/// Human-readable list of the constraints set on a rule
pub fn describe(rule: &Rule) -> Vec<String> {
    let mut parts = Vec::new();
    if rule.required {
        parts.push("required".to_string());
    }
    if let Some(pattern) = &rule.pattern {
        parts.push(format!("pattern {}", pattern.as_str()));
    }
    if let Some(min) = rule.min {
        parts.push(format!("min {}", format_number(min)));
    }
    if let Some(max) = rule.max {
        parts.push(format!("max {}", format_number(max)));
    }
    if let Some(len) = rule.min_length {
        parts.push(format!("min length {}", len));
    }
    if let Some(len) = rule.max_length {
        parts.push(format!("max length {}", len));
    }
    if rule.custom.is_some() {
        parts.push("custom".to_string());
    }
    if let Some(message) = &rule.message {
        parts.push(format!("message {:?}", message));
    }
    parts
}
