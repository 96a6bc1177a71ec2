//! aurvt GitHub - Upstream version lookup
//!
//! Resolves the latest version of a GitHub project: the latest release first,
//! then the newest tag. All HTTP goes through the [`Transport`] trait so the
//! lookup logic can run against canned responses.

mod archive;
mod client;
mod error;
mod repo;
mod strategy;
mod transport;

pub use archive::{is_archive_source, ArchiveCheck, ArchiveChecker, ARCHIVE_MARKER};
pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::UpstreamError;
pub use repo::RepoSlug;
pub use strategy::{strip_v, Strategy};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
