//! Ordered lookups for the latest upstream version

use serde::Deserialize;
use std::fmt;

/// One way of asking GitHub for the latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `GET /repos/{owner}/{repo}/releases/latest`
    LatestRelease,
    /// `GET /repos/{owner}/{repo}/tags`, first entry
    FirstTag,
}

impl Strategy {
    /// Strategies in the order they are tried
    pub const FALLBACK_CHAIN: [Strategy; 2] = [Strategy::LatestRelease, Strategy::FirstTag];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LatestRelease => write!(f, "releases"),
            Strategy::FirstTag => write!(f, "tags"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Release {
    pub tag_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Tag {
    pub name: String,
}

/// Removes a single leading `v` (`v2.0.0` -> `2.0.0`)
pub fn strip_v(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}
