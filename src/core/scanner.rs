//! Per-file literal scanner.
//!
//! Parses one source file with tree-sitter and walks the tree with an
//! explicit stack, emitting every plain string literal (decoded, subject to
//! the minimum-length filter) and every regular-expression literal (raw
//! `/pattern/flags` text, unfiltered) together with its start position.
//!
//! tree-sitter recovers from malformed input by wrapping the broken region
//! in `ERROR` nodes, so a file with syntax errors still yields the literals
//! it can locate. The walk descends into `ERROR` subtrees like any other.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::core::data::{LiteralOccurrence, SourceLocation};
use crate::core::unescape::decode_string;

/// Scans one file's text for string and regex literal occurrences.
///
/// The traversal uses an explicit stack instead of recursion, so deeply
/// nested or generated trees cannot exhaust the call stack. Children are
/// pushed in left-to-right order onto a LIFO stack, which visits later
/// siblings first: within one file, occurrences therefore come out in
/// reverse textual order. That order is deterministic and is preserved all
/// the way into the final report.
///
/// `min_length` applies to the decoded value of string literals only,
/// counted in Unicode scalar values; regex literals are always emitted.
pub fn scan(source: &str, file_path: &str, min_length: usize) -> Vec<LiteralOccurrence> {
    let Some(tree) = parse(source, file_path) else {
        return Vec::new();
    };

    let source_bytes = source.as_bytes();
    let root = tree.root_node();
    let mut occurrences = Vec::new();
    let mut cursor = root.walk();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node.kind() {
            // Plain string literal. Template strings have their own kind and
            // are never matched here; the walk still descends into them so
            // literals inside `${...}` substitutions are found.
            "string" => {
                if let Some(value) = string_value(node, source_bytes) {
                    if value.chars().count() >= min_length {
                        occurrences.push(LiteralOccurrence::new(value, start_of(&node, file_path)));
                    }
                }
                continue;
            }
            "regex" => {
                if let Ok(text) = node.utf8_text(source_bytes) {
                    occurrences.push(LiteralOccurrence::new(text, start_of(&node, file_path)));
                }
                continue;
            }
            _ => {}
        }

        cursor.reset(node);
        if cursor.goto_first_child() {
            loop {
                stack.push(cursor.node());
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
    }

    occurrences
}

/// Parses with the grammar matching the file extension. `None` (which
/// tree-sitter only returns under cancellation conditions litdup never
/// configures) makes the file contribute zero occurrences.
fn parse(source: &str, file_path: &str) -> Option<tree_sitter::Tree> {
    let mut parser = Parser::new();
    parser.set_language(&language_for(file_path)).ok()?;
    parser.parse(source, None)
}

/// TSX grammar for files with embedded markup, TypeScript otherwise.
fn language_for(file_path: &str) -> Language {
    match Path::new(file_path).extension().and_then(|ext| ext.to_str()) {
        Some("tsx" | "jsx") => tree_sitter_typescript::LANGUAGE_TSX.into(),
        _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    }
}

/// Decoded runtime value of a `string` node: the concatenated text of its
/// `string_fragment`/`escape_sequence` children (the quote delimiters are
/// anonymous tokens and drop out), run through escape decoding.
fn string_value(node: Node, source: &[u8]) -> Option<String> {
    let mut raw = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        raw.push_str(child.utf8_text(source).ok()?);
    }
    Some(decode_string(&raw))
}

fn start_of(node: &Node, file_path: &str) -> SourceLocation {
    let start = node.start_position();
    SourceLocation::new(file_path, start.row + 1, start.column)
}
