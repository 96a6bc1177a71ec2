//! Version command implementation

use aurvt_core::BuildInfo;

/// Prints build metadata
pub fn cmd_version(build: &BuildInfo) {
    println!("{}", build);
}
