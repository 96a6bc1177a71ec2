//! Error types for upstream lookups

use crate::strategy::Strategy;

/// Failure of a single GitHub lookup, or of the whole fallback chain
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid GitHub URL format: {0}")]
    InvalidUrl(String),

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("no tags found")]
    NoTags,

    #[error("Failed to fetch version from both releases and tags: {}", summarize(.0))]
    Exhausted(Vec<(Strategy, UpstreamError)>),
}

fn summarize(attempts: &[(Strategy, UpstreamError)]) -> String {
    attempts
        .iter()
        .map(|(strategy, err)| format!("{}: {}", strategy, err))
        .collect::<Vec<_>>()
        .join("; ")
}
