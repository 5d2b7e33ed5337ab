pub mod report;

pub use report::Reporter;
