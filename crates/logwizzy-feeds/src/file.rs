//! File / stdin feed for records exported earlier with `journalctl -o json`.

use crate::{FeedError, LineSource};
use std::path::Path;
use tokio::io::BufReader;

/// Open `path` as a line source. `-` means stdin.
pub async fn open(path: &Path) -> Result<LineSource, FeedError> {
    if path == Path::new("-") {
        tracing::debug!("reading records from stdin");
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| FeedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "reading records from file");
    Ok(Box::new(BufReader::new(file)))
}
