//! Runtime configuration for the check command

use std::path::{Path, PathBuf};

/// Settings for one `aurvt <package-dir>` run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory holding the PKGBUILD
    pub package_dir: PathBuf,
    /// Ignore list location
    pub ignore_file: PathBuf,
    /// GitHub API base URL
    pub api_url: String,
    /// `User-Agent` sent to GitHub
    pub user_agent: String,
}

impl CheckConfig {
    /// Name matched against the ignore list: the directory's final component
    pub fn package_name(&self) -> String {
        dir_name(&self.package_dir)
    }
}

fn dir_name(dir: &Path) -> String {
    if let Some(name) = dir.file_name() {
        return name.to_string_lossy().into_owned();
    }
    // `.`, `..` and similar have no file name of their own
    dir.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}
