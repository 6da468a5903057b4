//! logwizzy-core: LogWizzy core library.
//!
//! This crate holds the single-pass summarisation pipeline and the shared
//! types used by the feed and terminal crates.
//!
//! # Architecture
//!
//! ```text
//! line ──► record::parse ──► Aggregator ──► Ranker ──► presenter
//!               │                 ▲
//!               └─ severity,      │
//!                  timestamp ─────┘
//! ```
//!
//! Nothing in this crate performs I/O. Feeds push lines in, the presenter
//! takes the ranked groups out.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod ranker;
pub mod record;
pub mod severity;
pub mod timestamp;
pub mod types;

pub use aggregator::{Aggregator, IngestStats};
pub use error::DecodeError;
pub use ranker::{RankMode, Ranker};
pub use severity::{Severity, TiePolicy};
pub use types::{MessageGroup, ParsedRecord};
