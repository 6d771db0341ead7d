//! Human-readable renderings of assessment results.
pub mod report;

pub use report::format_report;
