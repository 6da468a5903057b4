//! Producer process feed: `journalctl -o json --since=<since>` by default.
//!
//! stdout carries the records; stderr is drained on its own task so a chatty
//! producer cannot stall on a full pipe while records are being ingested.

use crate::{reader, FeedError};
use logwizzy_core::{config::SourceConfig, Aggregator, IngestStats};
use std::process::{ExitStatus, Stdio};
use tokio::io::BufReader;
use tokio::process::{Child, ChildStdout, Command};
use tokio::task::JoinHandle;

/// Describes how to start the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalFeed {
    program: String,
    args: Vec<String>,
}

impl JournalFeed {
    /// A bare command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `journalctl -o json --since=<since>`.
    pub fn journalctl(since: &str) -> Self {
        Self::new("journalctl").with_journal_args(since)
    }

    /// The configured program with the JSON output and `--since` arguments,
    /// followed by any extra arguments from the config.
    pub fn from_config(source: &SourceConfig, since: &str) -> Self {
        Self::new(source.program.clone())
            .with_journal_args(since)
            .args(source.args.iter().cloned())
    }

    fn with_journal_args(self, since: &str) -> Self {
        self.arg("-o").arg("json").arg(format!("--since={since}"))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Start the producer. Every stderr line is passed to `stderr_sink` from
    /// a background task.
    pub fn spawn<F>(&self, stderr_sink: F) -> Result<RunningFeed, FeedError>
    where
        F: FnMut(String) + Send + 'static,
    {
        tracing::debug!(program = %self.program, args = ?self.args, "starting producer");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| FeedError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or(FeedError::MissingPipe("stdout"))?;
        let stderr = child.stderr.take().ok_or(FeedError::MissingPipe("stderr"))?;
        let stderr_task = reader::drain_lines(BufReader::new(stderr), stderr_sink);

        Ok(RunningFeed {
            program: self.program.clone(),
            child,
            stdout: BufReader::new(stdout),
            stderr_task,
        })
    }
}

/// A started producer.
#[derive(Debug)]
pub struct RunningFeed {
    program: String,
    child: Child,
    stdout: BufReader<ChildStdout>,
    stderr_task: JoinHandle<u64>,
}

/// How the producer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedExit {
    pub status: ExitStatus,
    /// Lines the producer wrote to stderr.
    pub stderr_lines: u64,
}

impl RunningFeed {
    /// Read the producer's stdout to EOF into `aggregator`.
    pub async fn ingest(&mut self, aggregator: &mut Aggregator) -> Result<IngestStats, FeedError> {
        reader::ingest(&mut self.stdout, aggregator).await
    }

    /// Wait for the producer to exit and for its stderr to be drained.
    pub async fn finish(mut self) -> Result<FeedExit, FeedError> {
        let status = self.child.wait().await.map_err(FeedError::Wait)?;
        let stderr_lines = self.stderr_task.await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stderr drain task failed");
            0
        });
        if !status.success() {
            tracing::warn!(program = %self.program, %status, "producer exited unsuccessfully");
        }
        Ok(FeedExit {
            status,
            stderr_lines,
        })
    }

    /// [`RunningFeed::ingest`] followed by [`RunningFeed::finish`].
    pub async fn run(mut self, aggregator: &mut Aggregator) -> Result<FeedExit, FeedError> {
        self.ingest(aggregator).await?;
        self.finish().await
    }
}
