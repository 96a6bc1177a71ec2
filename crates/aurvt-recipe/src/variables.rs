//! PKGBUILD variable table and `$name` / `${name}` substitution

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::parsers::clean_value;

/// Resolved top-level assignments of a PKGBUILD
pub struct VariableTable {
    values: HashMap<String, String>,
    bare: Regex,
    braced: Regex,
}

impl VariableTable {
    /// Collects every `name=value` line and resolves references between them.
    ///
    /// Blank lines and `#` comments are skipped; the last assignment of a name
    /// wins. Resolution runs depth-first in first-assignment order until every
    /// value is fully expanded, so forward references work. A reference that
    /// would re-enter a variable still being resolved is left as literal text.
    pub fn parse(text: &str) -> Result<Self> {
        let assignment = Regex::new(r"^(\w+)\s*=\s*(.+)$")
            .context("Failed to compile assignment pattern")?;

        let mut order: Vec<String> = Vec::new();
        let mut raw: HashMap<String, String> = HashMap::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some(caps) = assignment.captures(line) else {
                continue;
            };
            let name = caps[1].to_string();
            if !raw.contains_key(&name) {
                order.push(name.clone());
            }
            raw.insert(name, clean_value(&caps[2]));
        }

        let mut table = Self {
            values: HashMap::new(),
            bare: Regex::new(r"\$(\w+)").context("Failed to compile $name pattern")?,
            braced: Regex::new(r"\$\{(\w+)\}").context("Failed to compile ${name} pattern")?,
        };

        let mut resolver = Resolver {
            raw: &raw,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
            table: &table,
        };
        for name in &order {
            resolver.resolve(name);
        }
        let resolved = resolver.resolved;
        table.values = resolved;

        Ok(table)
    }

    /// Resolved value of a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Expands known references in `text`; unknown ones stay literal
    pub fn substitute(&self, text: &str) -> String {
        self.substitute_with(text, &mut |name: &str| self.values.get(name).cloned())
    }

    /// `$name` occurrences first, then `${name}`
    fn substitute_with(
        &self,
        text: &str,
        lookup: &mut dyn FnMut(&str) -> Option<String>,
    ) -> String {
        let expanded = self
            .bare
            .replace_all(text, |caps: &Captures| {
                lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned();

        self.braced
            .replace_all(&expanded, |caps: &Captures| {
                lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Depth-first resolution state used while building the table
struct Resolver<'a> {
    raw: &'a HashMap<String, String>,
    resolved: HashMap<String, String>,
    in_progress: Vec<String>,
    table: &'a VariableTable,
}

impl Resolver<'_> {
    fn resolve(&mut self, name: &str) -> Option<String> {
        if let Some(value) = self.resolved.get(name) {
            return Some(value.clone());
        }
        let raw = self.raw;
        let raw_value = raw.get(name)?;

        if self.in_progress.iter().any(|n| n == name) {
            log::warn!("Cyclic PKGBUILD variable reference through ${}", name);
            return None;
        }

        self.in_progress.push(name.to_string());
        let table = self.table;
        let value = table.substitute_with(raw_value, &mut |reference: &str| self.resolve(reference));
        self.in_progress.pop();

        self.resolved.insert(name.to_string(), value.clone());
        Some(value)
    }
}
