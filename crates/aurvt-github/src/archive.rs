//! "archive by tag" source URL check
//!
//! Sources shaped like `.../archive/refs/tags/<version>.tar.gz` are compared
//! against the repository's tag list independently of the main check.

use regex::Regex;

use crate::client::GitHubClient;
use crate::error::UpstreamError;
use crate::repo::RepoSlug;
use crate::strategy::{strip_v, Strategy};
use crate::transport::Transport;

/// Marker identifying an archive-by-tag source URL
pub const ARCHIVE_MARKER: &str = "archive/refs/tags/";

/// Outcome of checking one archive source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveCheck {
    UpToDate { current: String },
    Outdated { current: String, latest: String },
    /// The URL has the marker but no `<version>.tar.gz` token
    NoToken,
    /// Tag lookup failed; nothing is reported for this source
    Skipped,
}

/// Whether a source uses the archive-by-tag shape
pub fn is_archive_source(source: &str) -> bool {
    source.contains(ARCHIVE_MARKER)
}

/// Compares archive-by-tag sources with the repository's newest tag
pub struct ArchiveChecker {
    token: Regex,
}

impl ArchiveChecker {
    pub fn new() -> Result<Self, UpstreamError> {
        let token = Regex::new(r"archive/refs/tags/([^/]+)\.tar\.gz")?;
        Ok(Self { token })
    }

    /// Version token embedded in an archive source URL
    pub fn version_token(&self, source: &str) -> Option<String> {
        self.token
            .captures(source)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Compares the source's token with the first tag of `slug`.
    ///
    /// The token gets the same leading-`v` stripping as the fetched tag.
    pub fn check<T: Transport>(
        &self,
        client: &GitHubClient<T>,
        slug: &RepoSlug,
        source: &str,
    ) -> ArchiveCheck {
        let Some(token) = self.version_token(source) else {
            return ArchiveCheck::NoToken;
        };
        let current = strip_v(&token).to_string();

        match client.lookup(Strategy::FirstTag, slug) {
            Ok(latest) if latest == current => ArchiveCheck::UpToDate { current },
            Ok(latest) => ArchiveCheck::Outdated { current, latest },
            Err(e) => {
                log::debug!("Skipping archive check for {}: {}", source, e);
                ArchiveCheck::Skipped
            }
        }
    }
}
