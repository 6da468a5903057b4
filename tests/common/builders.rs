//! Test builders: ergonomic constructors for journal JSON lines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use logwizzy_core::{Aggregator, MessageGroup};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// JournalLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one line of `journalctl -o json` output.
///
/// # Example
///
/// ```rust
/// let line = JournalLineBuilder::new("disk full")
///     .priority("3")
///     .realtime(1_700_000_000_000_000)
///     .field("_SYSTEMD_UNIT", "storage.service")
///     .build();
/// ```
pub struct JournalLineBuilder {
    fields: Map<String, Value>,
}

impl JournalLineBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("MESSAGE".to_string(), Value::String(message.into()));
        Self { fields }
    }

    /// A record with no `MESSAGE` field at all.
    pub fn without_message() -> Self {
        Self { fields: Map::new() }
    }

    pub fn priority(self, priority: impl Into<String>) -> Self {
        self.field("PRIORITY", priority.into())
    }

    /// Realtime timestamp in microseconds, encoded as journald does (a string).
    pub fn realtime(self, micros: i64) -> Self {
        self.field("__REALTIME_TIMESTAMP", micros.to_string())
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> String {
        Value::Object(self.fields).to_string()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A journal line with a message and a priority.
pub fn journal_line(message: &str, priority: &str) -> String {
    JournalLineBuilder::new(message).priority(priority).build()
}

/// `count` copies of the same journal line.
pub fn repeated(message: &str, priority: &str, count: usize) -> Vec<String> {
    std::iter::repeat(journal_line(message, priority))
        .take(count)
        .collect()
}

/// Fold raw lines into a fresh aggregator.
pub fn aggregate<S: AsRef<str>>(lines: &[S]) -> Aggregator {
    let mut agg = Aggregator::new();
    for line in lines {
        agg.ingest_line(line.as_ref());
    }
    agg
}

/// Build groups from `(message, priority, count)` triples.
pub fn groups_of(shape: &[(&str, &str, usize)]) -> Vec<MessageGroup> {
    let lines: Vec<String> = shape
        .iter()
        .flat_map(|(msg, priority, count)| repeated(msg, priority, *count))
        .collect();
    aggregate(&lines).into_groups()
}

/// Sample texts of a ranked sequence.
pub fn samples(groups: &[MessageGroup]) -> Vec<&str> {
    groups.iter().map(MessageGroup::sample).collect()
}
