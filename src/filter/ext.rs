use crate::errors::{Result, ScanError};
use std::path::Path;

/// Suffixes reported when no extensions are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[".class", ".jar", ".DS_Store"];

/// Parse a comma-separated list of file extensions.
///
/// Items are taken literally: surrounding whitespace is trimmed and empty
/// items are dropped, but no dot is prepended and case is preserved.
pub fn parse_ext_list(ext_string: &str) -> Vec<String> {
    ext_string
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ordered, de-duplicated set of literal filename suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from literal suffixes. Rejects an empty set and the empty
    /// suffix, which would match every file.
    pub fn new<I, S>(suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if suffix.is_empty() {
                return Err(ScanError::InvalidExtensions(
                    "empty extension would match every file".to_string(),
                ));
            }
            if !set.contains(&suffix) {
                set.push(suffix);
            }
        }

        if set.is_empty() {
            return Err(ScanError::InvalidExtensions(
                "at least one extension is required".to_string(),
            ));
        }

        Ok(Self { suffixes: set })
    }

    pub fn defaults() -> Self {
        Self {
            suffixes: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.suffixes
    }

    /// Case-sensitive suffix test against a bare file name
    pub fn matches_name(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    /// Test the final component of `path`. Paths without a file name never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matches_name(&name.to_string_lossy()))
    }
}
