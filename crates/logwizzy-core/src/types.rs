//! Core types for logwizzy-core.
//!
//! [`ParsedRecord`] is the per-line value produced by the record parser and
//! consumed by the aggregator. [`MessageGroup`] is the aggregation unit handed
//! to the ranker and the presenter.

use crate::severity::Severity;
use chrono::{DateTime, Utc};

/// The minimal structured view of one input line.
///
/// Not retained after it has been folded into a [`MessageGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedRecord {
    /// Message text, `""` when the record had no message field.
    pub message: String,
    /// Raw priority token as found in the record.
    pub raw_severity: Option<String>,
    /// Raw realtime timestamp token as found in the record.
    pub raw_timestamp: Option<String>,
}

impl ParsedRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, token: impl Into<String>) -> Self {
        self.raw_severity = Some(token.into());
        self
    }

    pub fn with_timestamp(mut self, token: impl Into<String>) -> Self {
        self.raw_timestamp = Some(token.into());
        self
    }
}

/// One group per distinct message text seen during a run.
///
/// The sample text is both the grouping key and the display text. Severity
/// is fixed when the group is created. `count() == occurrences().len()`
/// always holds because [`MessageGroup::record`] is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageGroup {
    sample: String,
    count: usize,
    severity: Severity,
    occurrences: Vec<DateTime<Utc>>,
}

impl MessageGroup {
    /// Create a group from its first occurrence.
    pub fn new(sample: impl Into<String>, severity: Severity, first: DateTime<Utc>) -> Self {
        Self {
            sample: sample.into(),
            count: 1,
            severity,
            occurrences: vec![first],
        }
    }

    /// Record a further occurrence. The stored severity is left untouched.
    pub(crate) fn record(&mut self, ts: DateTime<Utc>) {
        self.count += 1;
        self.occurrences.push(ts);
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Occurrence timestamps in arrival order.
    pub fn occurrences(&self) -> &[DateTime<Utc>] {
        &self.occurrences
    }

    /// Timestamp of the first occurrence to arrive.
    pub fn first_seen(&self) -> DateTime<Utc> {
        // A group always holds at least its creating occurrence.
        self.occurrences[0]
    }

    /// Timestamp of the most recent occurrence to arrive.
    pub fn last_seen(&self) -> DateTime<Utc> {
        self.occurrences[self.occurrences.len() - 1]
    }
}
