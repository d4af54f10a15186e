//! Glob-based file discovery.
//!
//! Expands a glob pattern under a base directory into the ordered file set
//! the detector scans. The returned order (lexicographic, absolute paths) is
//! the resolution order the merge phase groups occurrences by, so it must be
//! deterministic across runs and platforms.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

/// Match options mirroring how glob patterns behave in the scanned
/// ecosystem's tooling: `*`/`?` stop at path separators and none of the
/// wildcards match a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolves `pattern` relative to `cwd` into a sorted list of absolute file
/// paths, skipping any directory whose name appears in `ignore_dirs` at any
/// depth.
///
/// Every failure here is fatal to the caller: an unparsable pattern, a
/// missing or non-directory `cwd`, or an unreadable entry during the walk.
pub fn find_files(pattern: &str, cwd: &Path, ignore_dirs: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = compile_pattern(pattern)?;

    let base = cwd
        .canonicalize()
        .with_context(|| format!("Failed to access directory: {}", cwd.display()))?;
    if !base.is_dir() {
        bail!("'{}' is not a directory.", cwd.display());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&base)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry, ignore_dirs));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", base.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
        let relative_str = relative.to_string_lossy();
        if patterns
            .iter()
            .any(|p| p.matches_with(&relative_str, MATCH_OPTIONS))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn is_ignored_dir(entry: &walkdir::DirEntry, ignore_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.iter().any(|dir| dir == name))
}

/// Compiles a pattern into one or more `glob::Pattern`s, one per brace
/// alternative.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Vec<Pattern>> {
    expand_braces(pattern)
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{pattern}\"")))
        .collect()
}

/// Expands `{a,b}` alternation groups into plain glob patterns, since
/// `glob::Pattern` has no brace syntax. Groups expand left to right; a `{`
/// without a matching `}` stays literal. Nested groups are not supported.
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_owned()];
    };
    let Some(close) = pattern[open..].find('}').map(|rel| open + rel) else {
        return vec![pattern.to_owned()];
    };

    let head = &pattern[..open];
    let tails = expand_braces(&pattern[close + 1..]);
    let mut expanded = Vec::new();
    for alt in pattern[open + 1..close].split(',') {
        for tail in &tails {
            expanded.push(format!("{head}{alt}{tail}"));
        }
    }
    expanded
}
