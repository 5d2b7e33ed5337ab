use super::outcome::{ScanOutcome, SkipReason, SkippedEntry};
use crate::config::ScanConfig;
use crate::errors::{Result, RootProblem, ScanError};
use crate::filter::ExtensionSet;
use ignore::WalkBuilder;
use log::{debug, info, trace, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collect every file below `root` whose name ends with one of `extensions`.
///
/// Entries that cannot be read are skipped; use [`scan`] to see which.
pub fn find_files(root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
    let config = ScanConfig::new(root, extensions.clone());
    scan(&config).map(|outcome| outcome.matches)
}

/// Walk `config.root_path` depth-first, entries sorted by name within each directory
pub fn scan(config: &ScanConfig) -> Result<ScanOutcome> {
    let root = config.root_path.as_path();
    validate_root(root)?;

    info!(
        "Scanning {} for {}",
        root.display(),
        config.extensions.as_slice().join(", ")
    );

    let mut walker = WalkBuilder::new(root);
    walker
        .hidden(false) // .DS_Store and friends are hidden
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .ignore(false)
        .follow_links(config.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut outcome = ScanOutcome::new();

    for entry in walker.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let skipped = skipped_entry(&err);
                warn!("Skipping {}", skipped);
                outcome.skipped.push(skipped);
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            outcome.dirs_visited += 1;
            continue;
        }

        // An unfollowed link still counts when it points at a file; linked
        // directories are only entered with follow_links.
        let is_file = file_type.is_file()
            || (file_type.is_symlink()
                && fs::metadata(entry.path()).is_ok_and(|m| m.is_file()));
        if !is_file {
            debug!("Ignoring non-regular entry {}", entry.path().display());
            continue;
        }

        outcome.files_visited += 1;
        if config.extensions.matches_path(entry.path()) {
            trace!("Match: {}", entry.path().display());
            outcome.matches.push(entry.into_path());
        }
    }

    info!(
        "Scan complete: {} matches among {} files in {} directories, {} skipped",
        outcome.matches.len(),
        outcome.files_visited,
        outcome.dirs_visited,
        outcome.skipped.len()
    );

    Ok(outcome)
}

/// The root must be an existing, listable directory
pub fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| {
        let reason = if e.kind() == io::ErrorKind::NotFound {
            RootProblem::NotFound
        } else {
            RootProblem::Unreadable(e)
        };
        ScanError::invalid_root(root, reason)
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::invalid_root(root, RootProblem::NotADirectory));
    }

    fs::read_dir(root).map_err(|e| ScanError::invalid_root(root, RootProblem::Unreadable(e)))?;
    Ok(())
}

fn skipped_entry(err: &ignore::Error) -> SkippedEntry {
    let (path, reason) = describe(err);
    SkippedEntry { path, reason }
}

fn describe(err: &ignore::Error) -> (Option<PathBuf>, SkipReason) {
    match err {
        ignore::Error::WithPath { path, err } => {
            let (inner, reason) = describe(err);
            (inner.or_else(|| Some(path.clone())), reason)
        }
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            describe(err)
        }
        ignore::Error::Loop { child, .. } => (Some(child.clone()), SkipReason::SymlinkLoop),
        ignore::Error::Io(io_err) => (None, SkipReason::from_io(io_err)),
        other => (None, SkipReason::Io(other.to_string())),
    }
}
