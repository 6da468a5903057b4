//! Presenter: decides which ranked groups are shown and renders them.
//!
//! The ranker hands over a fully ordered sequence; everything here is view
//! policy (filtering, limiting, the extra errors section) plus formatting.
//!
//! ```text
//! LogWizzy 0.2.0
//! #[--- LogWizzy Summary (top 10) (since today) ---]#
//! [ERRO] 3x disk full
//! ---
//! ```

use crate::theme::Theme;
use chrono::format::{Item, StrftimeItems};
use crossterm::style::ContentStyle;
use logwizzy_core::{MessageGroup, RankMode};
use std::io::{self, Write};

/// Used when a configured timestamp format does not parse.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which slice of the ranked groups is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The `limit` most frequent groups. With `extra_errors`, every
    /// Critical/Error group is listed again in a trailing section.
    Top { limit: usize, extra_errors: bool },
    /// Every group, most frequent first.
    All,
    /// Critical, Error and Warning groups, most severe first.
    Important,
    /// Critical and Error groups, most severe first.
    Errors,
}

impl View {
    /// Resolve the command-line switches. `errors` wins over `important`,
    /// which wins over `all`. The extra errors section is only shown when
    /// the limit came from the defaults.
    pub fn from_flags(errors: bool, important: bool, all: bool, limit: usize, limit_set: bool) -> Self {
        if errors {
            View::Errors
        } else if important {
            View::Important
        } else if all {
            View::All
        } else {
            View::Top {
                limit,
                extra_errors: !limit_set,
            }
        }
    }

    /// The ranking mode this view expects its input in.
    pub fn rank_mode(&self) -> RankMode {
        match self {
            View::Important | View::Errors => RankMode::Severity,
            View::Top { .. } | View::All => RankMode::Frequency,
        }
    }

    pub fn title(&self, since: &str) -> String {
        match self {
            View::Top { limit, .. } => {
                format!("#[--- LogWizzy Summary (top {limit}) (since {since}) ---]#")
            }
            View::All => format!("#[--- LogWizzy Full Log Dump (since {since}) ---]#"),
            View::Important => format!("#[--- LogWizzy Important Logs (since {since}) ---]#"),
            View::Errors => format!("#[--- LogWizzy Errors Only (since {since}) ---]#"),
        }
    }

    /// Groups shown in the main section, in ranked order.
    pub fn select<'a>(&self, ranked: &'a [MessageGroup]) -> Vec<&'a MessageGroup> {
        match self {
            View::Top { limit, .. } => ranked.iter().take(*limit).collect(),
            View::All => ranked.iter().collect(),
            View::Important => ranked.iter().filter(|g| g.severity().is_important()).collect(),
            View::Errors => ranked.iter().filter(|g| g.severity().is_error()).collect(),
        }
    }

    /// Groups for the trailing errors section, if this view has one.
    pub fn additional_errors<'a>(&self, ranked: &'a [MessageGroup]) -> Option<Vec<&'a MessageGroup>> {
        match self {
            View::Top {
                extra_errors: true, ..
            } => Some(ranked.iter().filter(|g| g.severity().is_error()).collect()),
            _ => None,
        }
    }
}

/// Renders a summary to any writer.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    theme: &'a Theme,
    since: String,
    color: bool,
    timestamp_format: Option<String>,
}

impl<'a> Summary<'a> {
    pub fn new(theme: &'a Theme, since: impl Into<String>) -> Self {
        Self {
            theme,
            since: since.into(),
            color: true,
            timestamp_format: None,
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Print first/last-seen times under each entry using a chrono format.
    /// A format chrono cannot render is replaced by
    /// [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn timestamps(mut self, format: Option<String>) -> Self {
        self.timestamp_format = format.map(|format| {
            if is_valid_format(&format) {
                format
            } else {
                tracing::warn!(%format, fallback = DEFAULT_TIMESTAMP_FORMAT, "invalid timestamp format");
                DEFAULT_TIMESTAMP_FORMAT.to_string()
            }
        });
        self
    }

    /// Banner and view title.
    pub fn render_header<W: Write>(&self, out: &mut W, view: &View) -> io::Result<()> {
        writeln!(out, "LogWizzy {}", env!("CARGO_PKG_VERSION"))?;
        self.styled_line(out, self.theme.title, &view.title(&self.since))
    }

    /// Main section plus the trailing errors section when the view has one.
    pub fn render_groups<W: Write>(
        &self,
        out: &mut W,
        view: &View,
        ranked: &[MessageGroup],
    ) -> io::Result<()> {
        for group in view.select(ranked) {
            self.render_entry(out, group)?;
        }

        if let Some(extra) = view.additional_errors(ranked) {
            let title = format!("#[--- Additional Errors (since {}) ---]#", self.since);
            self.styled_line(out, self.theme.title, &title)?;
            for group in extra {
                self.render_entry(out, group)?;
            }
        }
        Ok(())
    }

    pub fn render_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "LogWizzy Done!")
    }

    /// Header, groups and footer in one go.
    pub fn render<W: Write>(&self, out: &mut W, view: &View, ranked: &[MessageGroup]) -> io::Result<()> {
        self.render_header(out, view)?;
        self.render_groups(out, view, ranked)?;
        self.render_footer(out)
    }

    fn render_entry<W: Write>(&self, out: &mut W, group: &MessageGroup) -> io::Result<()> {
        let line = format!("[{}] {}x {}", group.severity(), group.count(), group.sample());
        self.styled_line(out, self.theme.severity_style(group.severity()), &line)?;

        if let Some(format) = &self.timestamp_format {
            let first = group.first_seen().with_timezone(&chrono::Local).format(format);
            let last = group.last_seen().with_timezone(&chrono::Local).format(format);
            self.styled_line(out, self.theme.timestamps, &format!("    first {first} · last {last}"))?;
        }
        self.styled_line(out, self.theme.separator, "---")
    }

    fn styled_line<W: Write>(&self, out: &mut W, style: ContentStyle, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", style.apply(text))
        } else {
            writeln!(out, "{text}")
        }
    }
}

fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
