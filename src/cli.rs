use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPathMode {
    /// Root as given joined with the path below it
    #[default]
    Joined,
    /// Paths relative to the scanned root
    Relative,
    /// Absolute paths
    Absolute,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "extfind")]
#[command(version = VERSION)]
#[command(about = "Recursively lists files whose names end with one of the given extensions")]
#[command(
    long_about = "Recursively lists files whose names end with one of the given extensions.\n\nExtensions are literal, case-sensitive suffixes (default: .class, .jar, .DS_Store).\nHidden files are included and ignore files are not consulted.\nMatches go to stdout, one per line; diagnostics go to stderr."
)]
pub struct Args {
    /// Suffix to match; repeat or comma-separate for several (e.g., .class,.jar)
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Follow symbolic links while scanning
    #[arg(short = 'L', long = "follow-links")]
    pub follow_links: bool,

    /// Do not follow symbolic links, even if the config file enables it
    #[arg(long = "no-follow-links", conflicts_with = "follow_links")]
    pub no_follow_links: bool,

    /// How to print matched paths
    #[arg(long = "display-path", value_enum)]
    pub display_path: Option<DisplayPathMode>,

    /// Read root path and extensions from a TOML file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory to scan (defaults to the configured root, then the current directory)
    pub directory: Option<PathBuf>,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
