//! `source=(...)` array extraction

use anyhow::{Context, Result};
use regex::Regex;

use crate::variables::VariableTable;

/// Extracts the entries of the `source` array in declaration order.
///
/// Entries may span lines or share a line; quoting is honoured when splitting.
/// Comment lines inside the array are skipped. Every entry goes through
/// variable substitution. A missing or empty array yields an empty vector.
pub fn extract_source_array(text: &str, variables: &VariableTable) -> Result<Vec<String>> {
    let re = Regex::new(r"(?m)^[ \t]*source[ \t]*=[ \t]*\(([^)]*)\)")
        .context("Failed to compile source array pattern")?;

    let Some(body) = re.captures(text).and_then(|c| c.get(1)) else {
        return Ok(Vec::new());
    };

    let sources = body
        .as_str()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(split_words)
        .map(|entry| variables.substitute(&entry))
        .collect();

    Ok(sources)
}

/// Splits a line on whitespace outside of quotes, dropping the quotes.
///
/// An unquoted `#` at the start of a word begins a comment.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => quote = Some(c),
            (None, '#') if current.is_empty() => break,
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_respects_quotes() {
        assert_eq!(split_words(r#""a b" 'c'  d"#), vec!["a b", "c", "d"]);
    }

    #[test]
    fn test_split_words_trailing_comment() {
        assert_eq!(split_words(r#""a.tar.gz" # upstream"#), vec!["a.tar.gz"]);
        assert_eq!(split_words(r#"'b#1.patch' c#d"#), vec!["b#1.patch", "c#d"]);
    }

    #[test]
    fn test_split_words_blank() {
        assert!(split_words("   ").is_empty());
    }
}
