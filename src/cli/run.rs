//! Command dispatch: wires parsed arguments to the config layer, the core
//! engine, and the report printers.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, Command, InitArgs, ScanArgs};
use super::exit_status::ExitStatus;
use super::report::{self, SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::{ScanConfig, detect};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init(cmd)) => init(cmd),
        None => scan(args.scan),
    }
}

fn scan(args: ScanArgs) -> Result<ExitStatus> {
    let cwd = resolve_cwd(args.cwd)?;
    let loaded = load_config(&cwd)?;

    if args.verbose {
        if loaded.from_file {
            println!("Using {}", CONFIG_FILE_NAME);
        } else {
            println!("No config file found, using defaults");
        }
    }

    // Per-field precedence: CLI flag > config file > built-in default.
    let config = ScanConfig {
        pattern: args.pattern.unwrap_or(loaded.config.pattern),
        cwd,
        threshold: args.threshold.unwrap_or(loaded.config.threshold),
        min_length: args.min_length.unwrap_or(loaded.config.min_length),
        ignore_dirs: loaded.config.ignore_dirs,
    };

    config.validate()?;

    report::print_scan_header(&config);

    let duplicates = detect(&config)?;

    if duplicates.is_empty() {
        report::print_success();
    } else {
        report::report(&duplicates);
    }

    Ok(ExitStatus::Success)
}

fn init(args: InitArgs) -> Result<ExitStatus> {
    let cwd = match args.cwd {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to resolve current directory.")?,
    };
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Error);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}

fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match cwd {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to resolve current directory.")?,
    };
    dir.canonicalize()
        .with_context(|| format!("Failed to access directory: {}", dir.display()))
}
