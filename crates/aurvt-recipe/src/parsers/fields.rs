//! Scalar `key=value` extraction

use anyhow::{Context, Result};
use regex::Regex;

/// Returns the value of the first `<field> = <value>` line, cleaned.
///
/// The field name must start the line (leading indentation allowed), so
/// `_pkgname=` or `source_url=` never match `pkgname` / `url`.
/// An assignment whose cleaned value is empty counts as absent.
pub fn extract_field(text: &str, field: &str) -> Result<Option<String>> {
    let pattern = format!(r"(?m)^[ \t]*{}[ \t]*=[ \t]*(.+)$", regex::escape(field));
    let re = Regex::new(&pattern)
        .with_context(|| format!("Failed to compile pattern for field {}", field))?;

    let value = re
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| clean_value(m.as_str()))
        .filter(|v| !v.is_empty());

    Ok(value)
}

/// Strips surrounding whitespace and quote characters
pub fn clean_value(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
