//! Report formatting and printing utilities.
//!
//! Rendering is kept separate from the core engine so litdup can be used as
//! a library. Every printer comes in a `_to` variant that takes a writer,
//! which is what the tests assert against.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{DuplicateReport, ScanConfig};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the scan header describing the effective settings.
pub fn print_scan_header(config: &ScanConfig) {
    print_scan_header_to(config, &mut io::stdout().lock());
}

/// Print the scan header to a custom writer.
pub fn print_scan_header_to<W: Write>(config: &ScanConfig, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Scanning for duplicate literals...".bold());
    let _ = writeln!(writer, "  Pattern: {}", config.pattern);
    let _ = writeln!(writer, "  Directory: {}", config.cwd.display());
    let _ = writeln!(writer, "  Threshold: {}+ occurrences", config.threshold);
    let _ = writeln!(writer, "  Min length: {} characters", config.min_length);
    let _ = writeln!(writer);
}

/// Print duplicate reports to stdout.
///
/// This is the main entry point for reporting. Each duplicate is displayed
/// with its kind, value, occurrence count, and every location.
///
/// # Example
///
/// ```ignore
/// use litdup::cli::report::report;
///
/// let duplicates = litdup::core::detect(&config)?;
/// report(&duplicates);
/// ```
pub fn report(duplicates: &[DuplicateReport]) {
    report_to(duplicates, &mut io::stdout().lock());
}

/// Print duplicate reports to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(duplicates: &[DuplicateReport], writer: &mut W) {
    if duplicates.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "Found {} duplicate {}:",
            duplicates.len(),
            if duplicates.len() == 1 {
                "literal"
            } else {
                "literals"
            }
        )
        .bold()
    );
    let _ = writeln!(writer);

    for duplicate in duplicates {
        print_duplicate(duplicate, writer);
    }

    let _ = writeln!(
        writer,
        "Suggestion: extract these literals into shared constants."
    );
}

/// Print a success message when no duplicates are found.
pub fn print_success() {
    print_success_to(&mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "No duplicate literals found".green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_duplicate<W: Write>(duplicate: &DuplicateReport, writer: &mut W) {
    let kind_tag = duplicate.kind.to_string().to_uppercase();

    let _ = writeln!(
        writer,
        "{} \"{}\"",
        format!("{}:", kind_tag).bold().yellow(),
        duplicate.value
    );
    let _ = writeln!(writer, "  Occurrences: {}", duplicate.count);

    // Clickable locations: --> path:line:col
    for location in &duplicate.occurrences {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            location.file_path,
            location.line,
            location.col
        );
    }

    let _ = writeln!(writer); // Empty line between duplicates
}

// ============================================================
// Tests
// ============================================================
