//! Litdup - duplicate literal finder for TypeScript projects
//!
//! Litdup is a CLI tool and library that scans TypeScript/TSX sources for
//! string and regular-expression literals repeated across a codebase. Every
//! value that appears at least a configurable number of times is reported
//! with all of its locations, as a nudge to extract it into a shared
//! constant.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch, rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core scanning engine (discovery, per-file scan, aggregation)

pub mod cli;
pub mod config;
pub mod core;
