//! Colour theme for the summary output.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] at startup, or [`Theme::load_or_default`]
//! to honour `~/.config/logwizzy/theme.toml` when it exists.

use config::{Config, File, FileFormat};
use crossterm::style::{Attribute, Color, ContentStyle};
use logwizzy_core::Severity;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.as_deref().and_then(parse_color);
        style.background_color = self.bg.as_deref().and_then(parse_color);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.dim {
            style.attributes.set(Attribute::Dim);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underlined {
            style.attributes.set(Attribute::Underlined);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawLevels {
    #[serde(default)]
    critical: RawStyle,
    #[serde(default)]
    error: RawStyle,
    #[serde(default)]
    warning: RawStyle,
    #[serde(default)]
    info: RawStyle,
    #[serde(default)]
    unknown: RawStyle,
}

#[derive(Debug, Default, Deserialize)]
struct RawChrome {
    #[serde(default)]
    title: RawStyle,
    #[serde(default)]
    separator: RawStyle,
    #[serde(default)]
    timestamps: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    levels: RawLevels,
    #[serde(default)]
    chrome: RawChrome,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Resolved output styles, one per severity plus the summary chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub critical: ContentStyle,
    pub error: ContentStyle,
    pub warning: ContentStyle,
    pub info: ContentStyle,
    pub unknown: ContentStyle,

    /// Banner and section titles.
    pub title: ContentStyle,
    /// The `---` line between entries.
    pub separator: ContentStyle,
    /// First/last-seen line under an entry.
    pub timestamps: ContentStyle,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load a user theme from `path`, falling back to the embedded default
    /// when the file is absent or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::load_default();
        }
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|src| Self::from_toml_str(&src))
        {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid theme");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored. Colour names that do not parse leave the
    /// style uncoloured.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            critical: raw.levels.critical.into_style(),
            error: raw.levels.error.into_style(),
            warning: raw.levels.warning.into_style(),
            info: raw.levels.info.into_style(),
            unknown: raw.levels.unknown.into_style(),
            title: raw.chrome.title.into_style(),
            separator: raw.chrome.separator.into_style(),
            timestamps: raw.chrome.timestamps.into_style(),
        })
    }

    pub fn severity_style(&self, severity: Severity) -> ContentStyle {
        match severity {
            Severity::Critical => self.critical,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Unknown => self.unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a crossterm [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_grey`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Grey),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGrey),
        "dark_red" => Some(Color::DarkRed),
        "dark_green" => Some(Color::DarkGreen),
        "dark_yellow" => Some(Color::DarkYellow),
        "dark_blue" => Some(Color::DarkBlue),
        "dark_magenta" => Some(Color::DarkMagenta),
        "dark_cyan" => Some(Color::DarkCyan),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(s.get(1..3)?, 16).ok()?;
            let g = u8::from_str_radix(s.get(3..5)?, 16).ok()?;
            let b = u8::from_str_radix(s.get(5..7)?, 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::AnsiValue(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
