pub mod outcome;
pub mod walk;

pub use outcome::{ScanOutcome, SkipReason, SkippedEntry};
pub use walk::{find_files, scan, validate_root};
