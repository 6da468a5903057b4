//! Line readers shared by every feed.
//!
//! Lines are read as raw bytes and converted with `from_utf8_lossy`, so a
//! stray invalid byte costs one replacement character instead of the line.

use crate::FeedError;
use logwizzy_core::{Aggregator, IngestStats};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

/// Read `reader` to EOF, folding each line into `aggregator`.
///
/// Each line is absorbed before the next one is awaited. Returns the
/// aggregator's cumulative stats.
pub async fn ingest<R>(mut reader: R, aggregator: &mut Aggregator) -> Result<IngestStats, FeedError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::with_capacity(4096);
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await.map_err(FeedError::Read)?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_newline(&buf));
        aggregator.ingest_line(&line);
    }

    let stats = aggregator.stats();
    tracing::debug!(
        lines = stats.lines,
        records = stats.records,
        malformed = stats.malformed,
        groups = aggregator.len(),
        "ingestion finished"
    );
    Ok(stats)
}

/// Spawn a task forwarding every line of `reader` to `sink`.
///
/// The task ends at EOF or on the first read error and resolves to the
/// number of lines forwarded.
pub fn drain_lines<R, F>(mut reader: R, mut sink: F) -> JoinHandle<u64>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    F: FnMut(String) + Send + 'static,
{
    tokio::spawn(async move {
        let mut forwarded = 0u64;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    sink(String::from_utf8_lossy(trim_newline(&buf)).into_owned());
                    forwarded += 1;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "diagnostic stream read failed");
                    break;
                }
            }
        }
        forwarded
    })
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
