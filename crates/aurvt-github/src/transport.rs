//! HTTP transport used by the GitHub client

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::UpstreamError;

/// Status and body of a completed GET request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs GET requests against the GitHub API
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, UpstreamError>;
}

/// Blocking reqwest transport
///
/// Uses the client's default timeout; requests are never retried.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| UpstreamError::Request {
                url: String::new(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, UpstreamError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| UpstreamError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| UpstreamError::Request {
            url: url.to_string(),
            message: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}
