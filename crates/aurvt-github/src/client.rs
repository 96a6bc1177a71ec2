//! GitHub REST client

use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::repo::RepoSlug;
use crate::strategy::{strip_v, Release, Strategy, Tag};
use crate::transport::Transport;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Queries releases and tags of a repository through a [`Transport`]
pub struct GitHubClient<T: Transport> {
    transport: T,
    api_url: String,
}

impl<T: Transport> GitHubClient<T> {
    pub fn new(transport: T, api_url: &str) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Latest upstream version, trying each strategy of the fallback chain.
    ///
    /// The first strategy that succeeds wins; if all fail the error lists
    /// every attempt.
    pub fn latest_version(&self, slug: &RepoSlug) -> Result<String, UpstreamError> {
        let mut attempts = Vec::new();

        for strategy in Strategy::FALLBACK_CHAIN {
            match self.lookup(strategy, slug) {
                Ok(version) => {
                    log::debug!("{} resolved via {}: {}", slug, strategy, version);
                    return Ok(version);
                }
                Err(e) => {
                    log::debug!("{} lookup for {} failed: {}", strategy, slug, e);
                    attempts.push((strategy, e));
                }
            }
        }

        Err(UpstreamError::Exhausted(attempts))
    }

    /// Runs a single strategy; the returned version has its leading `v` stripped
    pub fn lookup(&self, strategy: Strategy, slug: &RepoSlug) -> Result<String, UpstreamError> {
        let name = match strategy {
            Strategy::LatestRelease => {
                let release: Release = self.get_json(&self.endpoint(slug, "releases/latest"))?;
                release.tag_name
            }
            Strategy::FirstTag => {
                let tags: Vec<Tag> = self.get_json(&self.endpoint(slug, "tags"))?;
                tags.into_iter().next().ok_or(UpstreamError::NoTags)?.name
            }
        };

        Ok(strip_v(&name).to_string())
    }

    fn endpoint(&self, slug: &RepoSlug, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, slug.owner, slug.repo, path)
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, UpstreamError> {
        let response = self.transport.get(url)?;
        if response.status != 200 {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| UpstreamError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
