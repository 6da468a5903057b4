//! logwizzy-feeds: record feed adapters for logwizzy.
//!
//! A feed yields newline-delimited JSON records. [`ingest`] drains any
//! async line source into an [`Aggregator`](logwizzy_core::Aggregator), one
//! line at a time. [`journal::JournalFeed`] runs the producer process and
//! drains its stderr on a separate task; [`file::open`] reads pre-exported
//! records from a file or stdin.

pub mod file;
pub mod journal;
pub mod reader;

pub use journal::{FeedExit, JournalFeed, RunningFeed};
pub use reader::{drain_lines, ingest};

use std::path::PathBuf;

/// A boxed line source, as returned by [`file::open`].
pub type LineSource = Box<dyn tokio::io::AsyncBufRead + Send + Unpin>;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("producer {0} pipe was not captured")]
    MissingPipe(&'static str),
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read records: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed waiting for producer: {0}")]
    Wait(#[source] std::io::Error),
}
