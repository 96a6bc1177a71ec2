//! aurvt Recipe - PKGBUILD reading
//!
//! This crate is responsible for:
//! - Reading a PKGBUILD from a package directory
//! - Extracting `pkgname`, `pkgver`, `url` and the `source` array
//! - Expanding `$name` / `${name}` variable references
//! - Honouring the `.aurvtignore` list

pub mod ignore;
pub mod parsers;
pub mod variables;

use anyhow::{Context, Result};
use aurvt_core::{CoreError, RecipeInfo};
use std::path::Path;

use parsers::{extract_field, extract_source_array};
use variables::VariableTable;

/// File name of the recipe inside a package directory
pub const PKGBUILD_FILE_NAME: &str = "PKGBUILD";

/// Reads and parses `<package_dir>/PKGBUILD`
pub fn read_pkgbuild<P: AsRef<Path>>(package_dir: P) -> Result<RecipeInfo> {
    let path = package_dir.as_ref().join(PKGBUILD_FILE_NAME);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read PKGBUILD at {:?}", path))?;

    parse_pkgbuild(&text)
}

/// Parses PKGBUILD text into a `RecipeInfo`
///
/// Missing `pkgname`, `pkgver` or `url` fails with [`CoreError::MissingField`]
/// as the root cause.
pub fn parse_pkgbuild(text: &str) -> Result<RecipeInfo> {
    let variables = VariableTable::parse(text)?;
    log::debug!("Collected {} PKGBUILD variables", variables.len());

    let name = required_field(text, "pkgname", &variables)?;
    let version = required_field(text, "pkgver", &variables)?;
    let url = required_field(text, "url", &variables)?;
    let sources = extract_source_array(text, &variables)?;

    Ok(RecipeInfo::new(name, version, url, sources)?)
}

fn required_field(text: &str, field: &'static str, variables: &VariableTable) -> Result<String> {
    let raw = extract_field(text, field)?.ok_or(CoreError::MissingField(field))?;
    Ok(variables.substitute(&raw))
}
