//! Core data models

use std::fmt;

use crate::error::CoreError;

/// Metadata extracted from a PKGBUILD
///
/// `name`, `version` and `url` are guaranteed non-empty; `sources` keeps the
/// order of the `source=(...)` array and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInfo {
    /// Package name (`pkgname`)
    pub name: String,

    /// Packaged version (`pkgver`)
    pub version: String,

    /// Upstream project URL (`url`)
    pub url: String,

    /// Entries of the `source` array, variables already substituted
    pub sources: Vec<String>,
}

impl RecipeInfo {
    /// Creates a recipe, rejecting empty mandatory fields
    pub fn new(
        name: String,
        version: String,
        url: String,
        sources: Vec<String>,
    ) -> Result<Self, CoreError> {
        if name.is_empty() {
            return Err(CoreError::MissingField("pkgname"));
        }
        if version.is_empty() {
            return Err(CoreError::MissingField("pkgver"));
        }
        if url.is_empty() {
            return Err(CoreError::MissingField("url"));
        }

        Ok(Self { name, version, url, sources })
    }

    /// Whether the project URL points at github.com
    pub fn is_github(&self) -> bool {
        self.url.contains("github.com")
    }
}

impl fmt::Display for RecipeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.url)
    }
}

/// Result of comparing the packaged version against upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    UpToDate,
    Outdated { current: String, latest: String },
}

impl Verdict {
    /// Compares by exact string equality
    pub fn compare(current: &str, latest: &str) -> Self {
        if current == latest {
            Verdict::UpToDate
        } else {
            Verdict::Outdated {
                current: current.to_string(),
                latest: latest.to_string(),
            }
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Verdict::UpToDate)
    }
}

/// Static build metadata shown by `aurvt version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl BuildInfo {
    /// Builds the metadata from values baked in at compile time.
    ///
    /// Missing commit and date fall back to `development` and `unknown`.
    pub fn new(version: &str, commit: Option<&str>, date: Option<&str>) -> Self {
        Self {
            version: version.to_string(),
            commit: commit.unwrap_or("development").to_string(),
            date: date.unwrap_or("unknown").to_string(),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "aurvt version {}", self.version)?;
        writeln!(f, "Commit: {}", self.commit)?;
        write!(f, "Build Date: {}", self.date)
    }
}
