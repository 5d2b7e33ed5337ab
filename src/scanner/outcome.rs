use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an entry was left out of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    PermissionDenied,
    /// Entry vanished between listing and inspection, or a followed link dangles
    NotFound,
    SymlinkLoop,
    Io(String),
}

impl SkipReason {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            io::ErrorKind::NotFound => SkipReason::NotFound,
            _ => SkipReason::Io(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::NotFound => write!(f, "not found (vanished or dangling link)"),
            SkipReason::SymlinkLoop => write!(f, "symlink loop"),
            SkipReason::Io(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.reason),
            None => write!(f, "<unknown path>: {}", self.reason),
        }
    }
}

/// Result of one traversal
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Matching files in traversal order
    pub matches: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
    pub dirs_visited: usize,
    pub files_visited: usize,
}

impl ScanOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_from_io() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(SkipReason::from_io(&denied), SkipReason::PermissionDenied);

        let gone = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(SkipReason::from_io(&gone), SkipReason::NotFound);

        let other = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(
            SkipReason::from_io(&other),
            SkipReason::Io("disk on fire".to_string())
        );
    }

    #[test]
    fn test_skipped_entry_display() {
        let entry = SkippedEntry {
            path: Some(PathBuf::from("build/secret")),
            reason: SkipReason::PermissionDenied,
        };
        assert_eq!(entry.to_string(), "build/secret: permission denied");

        let entry = SkippedEntry {
            path: None,
            reason: SkipReason::SymlinkLoop,
        };
        assert_eq!(entry.to_string(), "<unknown path>: symlink loop");

        let entry = SkippedEntry {
            path: Some(PathBuf::from("lib/broken.jar")),
            reason: SkipReason::NotFound,
        };
        assert_eq!(
            entry.to_string(),
            "lib/broken.jar: not found (vanished or dangling link)"
        );
    }
}
