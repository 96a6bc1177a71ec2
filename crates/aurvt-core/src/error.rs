//! Error types for aurvt-core

/// Errors raised while building the core data model
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("could not find {0} in PKGBUILD")]
    MissingField(&'static str),
}
