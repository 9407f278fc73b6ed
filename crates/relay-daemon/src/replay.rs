//! JSONL replay producer.
//!
//! Each non-empty line is one listen document, exactly as the poller would
//! have received it. Useful for testing watch-lists against recorded kills.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// Feeds every line of `path` into the queue, then closes it.
///
/// Returns the number of lines sent. Stops early on shutdown or if the
/// pipeline goes away.
pub async fn replay_file(
    path: &Path,
    tx: mpsc::Sender<Vec<u8>>,
    mut shutdown: watch::Receiver<bool>,
) -> std::io::Result<usize> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();
    let mut sent = 0;

    info!(path = %path.display(), "Replaying listen documents");

    loop {
        if *shutdown.borrow() {
            debug!("Shutdown requested, stopping replay");
            break;
        }

        let line = tokio::select! {
            _ = shutdown.changed() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let delivered = tokio::select! {
            _ = shutdown.changed() => break,
            delivered = tx.send(line.into_bytes()) => delivered,
        };
        if delivered.is_err() {
            debug!("Pipeline closed, stopping replay");
            break;
        }
        sent += 1;
    }

    info!(sent, "Replay finished");
    Ok(sent)
}
