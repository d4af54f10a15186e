//! CLI argument definitions using clap.
//!
//! The interface uses clap's derive API. The default invocation (no
//! subcommand) runs a scan over the current project; `init` writes a starter
//! configuration file.
//!
//! ## Commands
//!
//! - (default): Scan for duplicated string and regex literals
//! - `init`: Initialize a .litduprc.json configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

/// Arguments for the default scan invocation.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Glob pattern for files to scan (overrides config file)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Project directory to scan (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Minimum number of occurrences to report (overrides config file)
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Minimum decoded length for string literals (overrides config file)
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to write the config file into (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a default .litduprc.json configuration file
    Init(InitArgs),
}
