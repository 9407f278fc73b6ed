//! Task wiring: one producer, a bounded queue, one sequential consumer.

use std::path::PathBuf;

use relay::{Relay, RelayConfig, RelayStats};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::poller::SourcePoller;
use crate::replay::replay_file;
use crate::sender::{Sink, WebhookSender};
use crate::DaemonError;

/// Processes raw documents in arrival order until the queue closes.
///
/// Each document is decoded, filtered and formatted before the next one is
/// looked at, and its notification (if any) is delivered before moving on.
pub async fn consume<S: Sink>(
    relay: &Relay,
    mut rx: mpsc::Receiver<Vec<u8>>,
    sink: &S,
) -> RelayStats {
    let mut stats = RelayStats::default();

    while let Some(raw) = rx.recv().await {
        let package = relay.decode(&raw);
        let notification = package.as_ref().and_then(|p| relay.process(p));
        stats.record(package.is_some(), notification.as_ref());

        if let Some(notification) = notification {
            info!(
                kill_id = notification.kill_id,
                kind = ?notification.kind,
                "Relaying notification"
            );
            sink.deliver(&notification).await;
        }
    }

    stats
}

/// Runs the relay until shutdown (Ctrl-C) or, in replay mode, end of file,
/// whichever comes first.
pub async fn run(config: RelayConfig, replay: Option<PathBuf>) -> Result<RelayStats, DaemonError> {
    let relay = Relay::from_config(&config);
    let sender = WebhookSender::new(&config.webhook)?;
    let (tx, rx) = mpsc::channel(config.source.queue_capacity.max(1));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    info!(
        watched = relay.watch().len(),
        posting = sender.is_posting(),
        "Starting killfeed relay"
    );

    let producer = match replay {
        Some(path) => tokio::spawn(async move {
            replay_file(&path, tx, shutdown_rx).await?;
            Ok::<(), DaemonError>(())
        }),
        None => {
            let poller = SourcePoller::new(&config.source)?;
            tokio::spawn(async move {
                poller.run(tx, shutdown_rx).await;
                Ok::<(), DaemonError>(())
            })
        }
    };

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => warn!(error = %e, "Could not listen for Ctrl-C"),
        }
        // Keep the flag alive until the process exits
        shutdown_tx.closed().await;
    });

    let stats = consume(&relay, rx, &sender).await;
    producer.await??;

    info!(
        received = stats.received,
        kills = stats.kills,
        losses = stats.losses,
        dropped = stats.dropped,
        discarded = stats.discarded,
        "Relay stopped"
    );
    Ok(stats)
}
