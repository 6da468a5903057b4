//! Severity normalisation.
//!
//! Journal priorities arrive either as syslog numbers (`"0"`..`"7"`) or as
//! names. [`Severity::normalize`] folds both into five levels and never fails.

use std::str::FromStr;

/// Normalised severity of a message group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Info,
    Unknown,
}

/// How `Critical` and `Error` compare when ranking by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// Critical and Error share the top band.
    #[default]
    CriticalEqualsError,
    /// Critical ranks strictly above Error.
    CriticalAboveError,
}

impl Severity {
    /// All levels, highest first.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Unknown,
    ];

    /// Map a priority token to a level. Case-insensitive, whitespace-trimmed.
    pub fn normalize(token: &str) -> Severity {
        match token.trim().to_ascii_lowercase().as_str() {
            "0" | "emerg" | "emergency" | "1" | "alert" | "2" | "crit" => Severity::Critical,
            "3" | "err" | "error" => Severity::Error,
            "4" | "warn" | "warning" => Severity::Warning,
            "5" | "notice" | "info" => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    /// Like [`Severity::normalize`], with an absent token mapping to `Unknown`.
    pub fn from_token(token: Option<&str>) -> Severity {
        token.map_or(Severity::Unknown, Severity::normalize)
    }

    /// Ranking weight; higher sorts first in severity mode.
    pub fn weight(self, policy: TiePolicy) -> u8 {
        match (self, policy) {
            (Severity::Critical, TiePolicy::CriticalAboveError) => 4,
            (Severity::Critical, TiePolicy::CriticalEqualsError) => 3,
            (Severity::Error, _) => 3,
            (Severity::Warning, _) => 2,
            (Severity::Info, _) => 1,
            (Severity::Unknown, _) => 0,
        }
    }

    /// Critical or Error.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Critical | Severity::Error)
    }

    /// Critical, Error or Warning.
    pub fn is_important(self) -> bool {
        self.is_error() || self == Severity::Warning
    }

    /// Four-letter label used in the summary output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRIT",
            Severity::Error => "ERRO",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Unknown => "UNKN",
        }
    }
}

/// Shorthand for [`Severity::normalize`].
pub fn normalize(token: &str) -> Severity {
    Severity::normalize(token)
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses summary labels (`ERRO`) and level names (`error`), for config and
/// CLI input. Unlike [`Severity::normalize`] this rejects unknown words.
impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crit" | "critical" => Ok(Severity::Critical),
            "erro" | "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "unkn" | "unknown" => Ok(Severity::Unknown),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}
