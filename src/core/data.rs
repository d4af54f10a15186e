//! Data types produced by the literal scan pipeline.
//!
//! Everything here is created fresh per invocation and never mutated after
//! construction; the detector builds its occurrence lists append-only while
//! merging and freezes them into [`DuplicateReport`] rows.

/// Pure position information in scanned source files (TS/TSX/JS/JSX).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column in bytes from the start of the line. Identical to the
    /// character column for ASCII source.
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Classification tag for a reported literal value.
///
/// Derived from the value text during aggregation, never from the syntax
/// node that produced the occurrence: a plain string whose content looks
/// like `/x/g` therefore classifies as [`LiteralKind::Regex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Regex,
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralKind::String => write!(f, "string"),
            LiteralKind::Regex => write!(f, "regex"),
        }
    }
}

/// One appearance of a literal: its decoded value and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOccurrence {
    /// Decoded string content, or the raw `/pattern/flags` text for a
    /// regular-expression literal.
    pub value: String,
    pub location: SourceLocation,
}

impl LiteralOccurrence {
    pub fn new(value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }
}

/// One row of the final report: a literal value repeated at or above the
/// configured threshold, with every location it appeared at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub value: String,
    pub kind: LiteralKind,
    /// Grouped by file in resolution order, within a file in scanner
    /// traversal order.
    pub occurrences: Vec<SourceLocation>,
    /// Always equals `occurrences.len()`.
    pub count: usize,
}
