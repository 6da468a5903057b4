//! Ranker: turns the aggregator's unordered groups into the display order.
//!
//! Every mode ends its key with the sample text, which is unique per group,
//! so the order is total and independent of hash-map iteration order.
//! Filtering and truncation belong to the presenter.

use crate::{severity::TiePolicy, types::MessageGroup};
use std::cmp::Ordering;

/// Primary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMode {
    /// Count descending, then sample text ascending.
    #[default]
    Frequency,
    /// Severity weight descending, then count descending, then sample text.
    Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ranker {
    pub mode: RankMode,
    pub policy: TiePolicy,
}

impl Ranker {
    pub fn new(mode: RankMode, policy: TiePolicy) -> Self {
        Self { mode, policy }
    }

    pub fn compare(&self, a: &MessageGroup, b: &MessageGroup) -> Ordering {
        let by_frequency = || {
            b.count()
                .cmp(&a.count())
                .then_with(|| a.sample().cmp(b.sample()))
        };
        match self.mode {
            RankMode::Frequency => by_frequency(),
            RankMode::Severity => b
                .severity()
                .weight(self.policy)
                .cmp(&a.severity().weight(self.policy))
                .then_with(by_frequency),
        }
    }

    pub fn rank(&self, mut groups: Vec<MessageGroup>) -> Vec<MessageGroup> {
        groups.sort_by(|a, b| self.compare(a, b));
        groups
    }
}

/// Rank `groups` with the given mode and tie policy.
pub fn rank(groups: Vec<MessageGroup>, mode: RankMode, policy: TiePolicy) -> Vec<MessageGroup> {
    Ranker::new(mode, policy).rank(groups)
}
