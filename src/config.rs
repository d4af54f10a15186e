use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::discover::compile_pattern;

pub const CONFIG_FILE_NAME: &str = ".litduprc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

fn default_pattern() -> String {
    "**/*.{ts,tsx}".to_string()
}

fn default_threshold() -> usize {
    3
}

fn default_min_length() -> usize {
    3
}

pub fn default_ignore_dirs() -> Vec<String> {
    [
        "node_modules",
        ".git",
        "dist",
        "build",
        "coverage",
        ".next",
        "out",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            threshold: default_threshold(),
            min_length: default_min_length(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the pattern does not compile as a glob, the
    /// threshold is below 2, or an ignore entry is a path instead of a
    /// plain directory name.
    pub fn validate(&self) -> Result<()> {
        compile_pattern(&self.pattern)
            .with_context(|| format!("Invalid glob pattern in 'pattern': \"{}\"", self.pattern))?;

        if self.threshold < 2 {
            anyhow::bail!(
                "'threshold' must be at least 2 (got {}).",
                self.threshold
            );
        }

        for dir in &self.ignore_dirs {
            if dir.contains('/') || dir.contains('\\') {
                anyhow::bail!(
                    "'ignoreDirs' entries must be plain directory names, got \"{}\"",
                    dir
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
