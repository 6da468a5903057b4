//! Command-line surface.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "logwizzy",
    version,
    disable_version_flag = true,
    about = "LogWizzy: deduplicated, ranked summary of journal logs"
)]
pub struct Cli {
    /// Since when to read logs (passed to journalctl --since).
    #[arg(short, long, value_name = "VALUE")]
    pub since: Option<String>,

    /// Number of log entries to show (default 10).
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show all logs without limit.
    #[arg(short, long)]
    pub all: bool,

    /// Show only important logs (CRIT, ERRO, WARN).
    #[arg(short, long)]
    pub important: bool,

    /// Show only errors (CRIT + ERRO).
    #[arg(short, long)]
    pub errors: bool,

    /// Show version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Read records from a file of `journalctl -o json` output ("-" for stdin)
    /// instead of running journalctl.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Print first/last-seen times under each entry.
    #[arg(long)]
    pub timestamps: bool,

    /// Rank CRIT strictly above ERRO in the important/errors views.
    #[arg(long)]
    pub strict_critical: bool,

    /// Write debug logs to /tmp/logwizzy-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}
