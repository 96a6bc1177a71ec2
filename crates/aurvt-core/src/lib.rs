//! aurvt Core - Shared data models
//!
//! This crate defines the data structures passed between the recipe parser,
//! the GitHub fetcher and the CLI: `RecipeInfo`, `Verdict` and `BuildInfo`.

mod models;
mod error;

pub use models::{BuildInfo, RecipeInfo, Verdict};
pub use error::CoreError;
