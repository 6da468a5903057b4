//! LogWizzy: deduplicated, ranked summary of journal logs.
//!
//! Reads `journalctl -o json` output (or an exported file), groups identical
//! messages, classifies them by severity and prints a ranked, colour-coded
//! summary. The pipeline layers live in the workspace crates and are
//! re-exported here so integration tests can reach them through one path.
//!
//! # Architecture
//!
//! ```text
//! JournalFeed ──► Aggregator ──► Ranker ──► Summary
//!  (feeds)         (core)        (core)     (term)
//!     │
//!     └─ stderr drain ──► operator
//! ```
//!
//! Ingestion is a single sequential loop; the stderr drain and the spinner
//! run on their own tasks and never touch the aggregator.

pub mod app;
pub mod cli;

pub use logwizzy_core::{
    Aggregator, IngestStats, MessageGroup, ParsedRecord, RankMode, Ranker, Severity, TiePolicy,
};
pub use logwizzy_feeds::{FeedError, JournalFeed};
pub use logwizzy_term::{Summary, Theme, View};
