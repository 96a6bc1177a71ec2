//! `.aurvtignore` handling

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Default ignore file, looked up relative to the working directory
pub const IGNORE_FILE_NAME: &str = ".aurvtignore";

/// Package names that should not be checked
#[derive(Debug, Default, Clone)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    /// Loads the list from `path`.
    ///
    /// A missing file means nothing is ignored. Any other read failure is
    /// logged and treated the same way.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No ignore file at {:?}", path);
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read ignore file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// One name per line; blank lines and `#` comments are skipped
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        Self { names }
    }

    /// Exact match against a package directory name
    pub fn contains(&self, package: &str) -> bool {
        self.names.contains(package)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
