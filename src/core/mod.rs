//! Core scanning engine.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`discover`]: expand a glob pattern into the list of files to scan.
//! 2. [`scanner`]: parse one file and collect every literal it contains.
//! 3. [`detector`]: run the scanner over all files in parallel, merge the
//!    results by literal value, and keep the values repeated often enough
//!    to report.

pub mod data;
pub mod detector;
pub mod discover;
pub mod scanner;
pub mod unescape;

// Re-export the types that make up the public API surface.
pub use data::{DuplicateReport, LiteralKind, LiteralOccurrence, SourceLocation};
pub use detector::{ScanConfig, detect};
pub use discover::find_files;
