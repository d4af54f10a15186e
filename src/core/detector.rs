//! Cross-file duplicate aggregation.
//!
//! Resolves the file set, scans every file in parallel, then folds the
//! per-file occurrence lists into one value-keyed index: classify, filter by
//! threshold, sort by count. The fold runs sequentially over results
//! gathered in file-resolution order, so the report is identical no matter
//! how the parallel phase interleaved.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use regex::Regex;

use crate::core::data::{DuplicateReport, LiteralKind, LiteralOccurrence, SourceLocation};
use crate::core::discover::find_files;
use crate::core::scanner;

/// Values shaped like `/pattern/` or `/pattern/flags` classify as regex.
/// The shape check runs on the value text alone, so a plain string written
/// as `"/foo/g"` classifies as regex too. Accepted, documented ambiguity.
static REGEX_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/.*/[gimsuvy]*$").unwrap());

/// Run parameters for one [`detect`] call.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub pattern: String,
    pub cwd: PathBuf,
    /// Minimum occurrence count for a value to be reported. At least 2.
    pub threshold: usize,
    /// Minimum decoded length for string literals, in characters. Does not
    /// apply to regex literals.
    pub min_length: usize,
    /// Directory names skipped during discovery, at any depth.
    pub ignore_dirs: Vec<String>,
}

impl ScanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.threshold < 2 {
            bail!("Threshold must be at least 2 (got {}).", self.threshold);
        }
        crate::core::discover::compile_pattern(&self.pattern)?;
        for dir in &self.ignore_dirs {
            if dir.contains('/') || dir.contains('\\') {
                bail!(
                    "Ignore entry must be a plain directory name, not a path: \"{}\"",
                    dir
                );
            }
        }
        Ok(())
    }
}

/// Scans the configured file set and returns every literal value repeated at
/// least `threshold` times, sorted by occurrence count descending. Values
/// with equal counts keep their first-discovery order.
///
/// Discovery and read failures abort the whole call; there is no partial
/// report. Parse trouble inside one file is not a failure (the scanner
/// extracts what it can) and never aborts the scan.
pub fn detect(config: &ScanConfig) -> Result<Vec<DuplicateReport>> {
    config.validate()?;

    let files = find_files(&config.pattern, &config.cwd, &config.ignore_dirs)?;

    // Parallel fan-out. collect() keeps file-resolution order and
    // short-circuits on the first read failure.
    let per_file: Vec<Vec<LiteralOccurrence>> = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            Ok(scanner::scan(&source, &path.to_string_lossy(), config.min_length))
        })
        .collect::<Result<_>>()?;

    Ok(aggregate(per_file, config.threshold))
}

/// Sequential merge of per-file occurrence lists, in file-resolution order.
fn aggregate(per_file: Vec<Vec<LiteralOccurrence>>, threshold: usize) -> Vec<DuplicateReport> {
    let mut occurrences_by_value: HashMap<String, Vec<SourceLocation>> = HashMap::new();
    // Insertion order of the map keys, which the stable sort below falls
    // back to for equal counts.
    let mut first_seen: Vec<String> = Vec::new();

    for file_occurrences in per_file {
        for occurrence in file_occurrences {
            match occurrences_by_value.get_mut(&occurrence.value) {
                Some(locations) => locations.push(occurrence.location),
                None => {
                    first_seen.push(occurrence.value.clone());
                    occurrences_by_value.insert(occurrence.value, vec![occurrence.location]);
                }
            }
        }
    }

    let mut reports: Vec<DuplicateReport> = first_seen
        .into_iter()
        .filter_map(|value| {
            let occurrences = occurrences_by_value.remove(&value)?;
            if occurrences.len() < threshold {
                return None;
            }
            Some(DuplicateReport {
                kind: classify(&value),
                count: occurrences.len(),
                value,
                occurrences,
            })
        })
        .collect();

    reports.sort_by(|a, b| b.count.cmp(&a.count));
    reports
}

/// Regex-shape heuristic: starts with `/` and ends with `/` plus zero or
/// more valid flag characters.
fn classify(value: &str) -> LiteralKind {
    if value.starts_with('/') && REGEX_SHAPE.is_match(value) {
        LiteralKind::Regex
    } else {
        LiteralKind::String
    }
}
