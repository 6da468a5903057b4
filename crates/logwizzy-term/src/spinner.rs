//! Progress spinner shown while records are being read.
//!
//! Runs as its own task and knows nothing about the aggregation. The owner
//! calls [`Spinner::stop`] once ingestion is done; the line is cleared before
//! `stop` returns so the summary starts on a clean line.

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

pub struct Spinner {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Spin on stderr with the default label and interval.
    pub fn start() -> Self {
        Self::start_with(std::io::stderr(), "Loading logs...", DEFAULT_INTERVAL)
    }

    pub fn start_with<W>(mut out: W, label: impl Into<String>, interval: Duration) -> Self
    where
        W: Write + Send + 'static,
    {
        let label = label.into();
        let token = CancellationToken::new();
        let stop = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut frame = 0usize;
            loop {
                tokio::select! {
                    _ = stop.cancelled() => break,
                    _ = ticker.tick() => {
                        // Cosmetic output; a closed terminal is not worth failing over.
                        let _ = write!(out, "\r{label} {} ", FRAMES[frame % FRAMES.len()]);
                        let _ = out.flush();
                        frame += 1;
                    }
                }
            }
            let _ = queue!(out, Clear(ClearType::CurrentLine));
            let _ = write!(out, "\r");
            let _ = out.flush();
        });

        Self { token, handle }
    }

    /// Signal the task to stop and wait until the line has been cleared.
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(err) = self.handle.await {
            tracing::debug!(error = %err, "spinner task ended abnormally");
        }
    }
}
