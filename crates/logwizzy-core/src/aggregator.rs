//! Aggregator: folds parsed records into one [`MessageGroup`] per distinct
//! message text.
//!
//! An `Aggregator` is created per run and owned by whoever drives ingestion.
//! It has a single writer, so no locking is involved. Once input is
//! exhausted, [`Aggregator::into_groups`] hands the unordered groups to the
//! ranker.

use crate::{record, severity::Severity, timestamp, types::MessageGroup, ParsedRecord};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Line and record counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestStats {
    /// Lines offered through [`Aggregator::ingest_line`].
    pub lines: u64,
    /// Whitespace-only lines.
    pub blank: u64,
    /// Non-blank lines that were not a JSON object.
    pub malformed: u64,
    /// Records folded into a group.
    pub records: u64,
    /// Records whose timestamp was absent or undecodable.
    pub timestamp_fallbacks: u64,
}

#[derive(Debug, Default)]
pub struct Aggregator {
    groups: HashMap<String, MessageGroup>,
    stats: IngestStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record, using the wall clock when its timestamp is unusable.
    pub fn ingest(&mut self, record: ParsedRecord) {
        self.ingest_with(record, Utc::now);
    }

    /// Fold one record. `now` is only called when the record's timestamp is
    /// absent or fails to decode.
    pub fn ingest_with(&mut self, record: ParsedRecord, now: impl FnOnce() -> DateTime<Utc>) {
        let severity = Severity::from_token(record.raw_severity.as_deref());
        let ts = match record.raw_timestamp.as_deref().map(timestamp::decode) {
            Some(Ok(ts)) => ts,
            Some(Err(err)) => {
                tracing::trace!(error = %err, "timestamp fallback");
                self.stats.timestamp_fallbacks += 1;
                now()
            }
            None => {
                self.stats.timestamp_fallbacks += 1;
                now()
            }
        };

        self.stats.records += 1;
        match self.groups.get_mut(&record.message) {
            Some(group) => group.record(ts),
            None => {
                let group = MessageGroup::new(record.message.clone(), severity, ts);
                self.groups.insert(record.message, group);
            }
        }
    }

    /// Parse and fold one raw line. Returns `true` when a record was absorbed.
    pub fn ingest_line(&mut self, line: &str) -> bool {
        self.stats.lines += 1;
        if line.trim().is_empty() {
            self.stats.blank += 1;
            return false;
        }
        match record::parse(line) {
            Some(rec) => {
                self.ingest(rec);
                true
            }
            None => {
                self.stats.malformed += 1;
                false
            }
        }
    }

    /// Number of distinct messages seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, message: &str) -> Option<&MessageGroup> {
        self.groups.get(message)
    }

    /// Groups in unspecified order. Use the ranker for anything displayed.
    pub fn groups(&self) -> impl Iterator<Item = &MessageGroup> {
        self.groups.values()
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Consume the aggregator, yielding its groups in unspecified order.
    pub fn into_groups(self) -> Vec<MessageGroup> {
        self.groups.into_values().collect()
    }
}
