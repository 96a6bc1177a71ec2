//! GitHub `owner/repo` extraction

use regex::Regex;
use std::fmt;

use crate::error::UpstreamError;

/// Owner and repository name of a GitHub project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Extracts `github.com/<owner>/<repo>` from any URL.
    ///
    /// A trailing `.git` is dropped from the repository name.
    pub fn from_url(url: &str) -> Result<Self, UpstreamError> {
        let re = Regex::new(r"github\.com/([^/?#]+)/([^/?#]+)")?;

        let caps = re
            .captures(url)
            .ok_or_else(|| UpstreamError::InvalidUrl(url.to_string()))?;

        let owner = caps[1].to_string();
        let repo = caps[2].trim_end_matches(".git").to_string();
        if repo.is_empty() {
            return Err(UpstreamError::InvalidUrl(url.to_string()));
        }

        Ok(Self { owner, repo })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_project_url() {
        let slug = RepoSlug::from_url("https://github.com/pyhunspell/pyhunspell").unwrap();
        assert_eq!(slug.owner, "pyhunspell");
        assert_eq!(slug.repo, "pyhunspell");
    }

    #[test]
    fn test_deep_url_and_git_suffix() {
        let slug = RepoSlug::from_url("git+https://github.com/o/r.git#tag=v1").unwrap();
        assert_eq!(slug.to_string(), "o/r");

        let slug = RepoSlug::from_url("https://github.com/o/r/archive/refs/tags/1.0.tar.gz").unwrap();
        assert_eq!(slug.to_string(), "o/r");
    }

    #[test]
    fn test_non_github_url_is_invalid() {
        assert!(matches!(
            RepoSlug::from_url("https://gitlab.com/o/r"),
            Err(UpstreamError::InvalidUrl(_))
        ));
        assert!(RepoSlug::from_url("https://github.com/onlyowner").is_err());
    }
}
