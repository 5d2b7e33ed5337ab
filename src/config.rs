use crate::cli::{Args, DisplayPathMode};
use crate::errors::{ConfigProblem, Result, ScanError};
use crate::filter::{parse_ext_list, ExtensionSet};
use crate::util::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a `--config` TOML file. Every key is optional.
///
/// ```toml
/// root_path = "~/projects/shareit"
/// extensions = [".class", ".jar", ".DS_Store"]
/// follow_links = false
/// display_path = "relative"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root_path: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub follow_links: Option<bool>,
    pub display_path: Option<DisplayPathMode>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let wrap = |source: ConfigProblem| ScanError::Config {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        toml::from_str(&content).map_err(|e| wrap(e.into()))
    }
}

/// Fully resolved scan parameters
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root_path: PathBuf,
    pub extensions: ExtensionSet,
    pub follow_links: bool,
    pub display_path: DisplayPathMode,
}

impl ScanConfig {
    pub fn new(root_path: impl Into<PathBuf>, extensions: ExtensionSet) -> Self {
        Self {
            root_path: root_path.into(),
            extensions,
            follow_links: false,
            display_path: DisplayPathMode::default(),
        }
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_display_path(mut self, display_path: DisplayPathMode) -> Self {
        self.display_path = display_path;
        self
    }

    /// Resolve configuration from CLI arguments, the optional config file, and defaults
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// CLI flags win over the config file, which wins over built-in defaults
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let root_path = args
            .directory
            .clone()
            .or(file.root_path)
            .unwrap_or_else(|| PathBuf::from("."));

        let extensions = if !args.extensions.is_empty() {
            let parsed: Vec<String> = args
                .extensions
                .iter()
                .flat_map(|raw| parse_ext_list(raw))
                .collect();
            ExtensionSet::new(parsed)?
        } else if let Some(list) = file.extensions {
            ExtensionSet::new(list)?
        } else {
            ExtensionSet::defaults()
        };

        let follow_links = if args.no_follow_links {
            false
        } else {
            args.follow_links || file.follow_links.unwrap_or(false)
        };
        let display_path = args
            .display_path
            .or(file.display_path)
            .unwrap_or_default();

        Ok(Self::new(expand_tilde(&root_path), extensions)
            .with_follow_links(follow_links)
            .with_display_path(display_path))
    }
}
