//! Configuration types for logwizzy.
//!
//! [`Config::load`] reads `~/.config/logwizzy/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::severity::TiePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[summary]
limit                   = 10
since                   = "today"
critical_outranks_error = false

[source]
program = "journalctl"

[ui]
color            = true
spinner          = true
show_timestamps  = false
timestamp_format = "%Y-%m-%d %H:%M:%S"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/logwizzy/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[summary]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Groups shown in the default view.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Value passed to the producer as `--since`.
    #[serde(default = "default_since")]
    pub since: String,
    #[serde(default)]
    pub critical_outranks_error: bool,
}

fn default_limit() -> usize { 10 }
fn default_since() -> String { "today".to_string() }

impl SummaryConfig {
    pub fn tie_policy(&self) -> TiePolicy {
        if self.critical_outranks_error {
            TiePolicy::CriticalAboveError
        } else {
            TiePolicy::CriticalEqualsError
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            since: default_since(),
            critical_outranks_error: false,
        }
    }
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Extra arguments appended after `-o json --since=<since>`.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_program() -> String { "journalctl".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub spinner: bool,
    #[serde(default)]
    pub show_timestamps: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_true() -> bool { true }
fn default_timestamp_format() -> String { "%Y-%m-%d %H:%M:%S".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            spinner: true,
            show_timestamps: false,
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/logwizzy/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logwizzy")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
