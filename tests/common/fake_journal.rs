//! FakeJournal: an in-memory stand-in for `journalctl`'s stdout.
//!
//! The writer half pushes lines into a `tokio::io::duplex` pipe; the reader
//! half is an `AsyncBufRead` that any feed reader can consume. Dropping or
//! closing the writer is seen as EOF by the reader.

use tokio::io::{AsyncWriteExt, BufReader, DuplexStream};

/// A handle for pushing log lines into a [`fake_journal`] stream.
pub struct FakeJournalWriter {
    tx: DuplexStream,
}

impl FakeJournalWriter {
    /// Send a line. Adds a trailing newline if not already present.
    pub async fn send_line(&mut self, line: impl Into<String>) {
        let mut s = line.into();
        if !s.ends_with('\n') {
            s.push('\n');
        }
        self.tx.write_all(s.as_bytes()).await.expect("fake journal reader dropped");
    }

    /// Send multiple lines at once (simulates a burst).
    pub async fn send_burst<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.send_line(line.as_ref()).await;
        }
    }

    /// Send raw bytes with no newline handling (for partial-line tests).
    pub async fn send_raw(&mut self, bytes: &[u8]) {
        self.tx.write_all(bytes).await.expect("fake journal reader dropped");
    }

    /// Close the stream, causing the consumer to see EOF.
    pub async fn close(mut self) {
        let _ = self.tx.shutdown().await;
    }
}

/// Create a linked writer/reader pair with a small pipe buffer, so bursts
/// only complete while the reader keeps draining.
///
/// ```rust
/// let (mut writer, reader) = fake_journal();
/// writer.send_line(r#"{"MESSAGE":"hello"}"#).await;
/// writer.close().await;
/// ```
pub fn fake_journal() -> (FakeJournalWriter, BufReader<DuplexStream>) {
    let (tx, rx) = tokio::io::duplex(1024);
    (FakeJournalWriter { tx }, BufReader::new(rx))
}
