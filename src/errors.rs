use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Why a root path cannot be scanned
#[derive(Debug, Error)]
pub enum RootProblem {
    #[error("no such directory")]
    NotFound,

    #[error("not a directory")]
    NotADirectory,

    #[error("{0}")]
    Unreadable(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid root '{}': {reason}", .path.display())]
    InvalidRoot { path: PathBuf, reason: RootProblem },

    #[error("Invalid extensions: {0}")]
    InvalidExtensions(String),

    #[error("Failed to load config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigProblem,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigProblem {
    #[error("{0}")]
    Read(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] toml::de::Error),
}

impl ScanError {
    pub fn invalid_root(path: impl Into<PathBuf>, reason: RootProblem) -> Self {
        ScanError::InvalidRoot {
            path: path.into(),
            reason,
        }
    }
}
