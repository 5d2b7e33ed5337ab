pub mod cli;
pub mod config;
pub mod errors;
pub mod filter;
pub mod output;
pub mod scanner;
pub mod util;

pub use cli::{Args, DisplayPathMode};
pub use config::{FileConfig, ScanConfig};
pub use errors::{Result, RootProblem, ScanError};
pub use filter::ExtensionSet;
pub use output::Reporter;
pub use scanner::{find_files, scan, ScanOutcome, SkipReason, SkippedEntry};

use log::warn;
use std::io::{self, Write};

/// Resolve configuration, scan, and print matches to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ScanOutcome> {
    let config = ScanConfig::from_args(args)?;
    let outcome = scan(&config)?;

    let reporter = Reporter::new(&config.root_path, config.display_path);
    match reporter.write_all(out, &outcome.matches) {
        Ok(()) => {}
        // Downstream closed early, e.g. `extfind | head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => return Err(e.into()),
    }

    if !outcome.is_complete() {
        warn!(
            "{} entries could not be read and were skipped",
            outcome.skipped.len()
        );
    }

    Ok(outcome)
}
