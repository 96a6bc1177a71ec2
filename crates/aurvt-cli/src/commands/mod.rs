//! Command implementations

mod check;
mod version;

pub use check::cmd_check;
pub use version::cmd_version;
