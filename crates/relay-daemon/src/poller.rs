//! RedisQ long-poll producer.
//!
//! Each GET blocks server-side until a kill is available or the wait window
//! expires. The raw body is handed to the pipeline untouched; decoding
//! happens on the consumer side.

use std::time::Duration;

use relay::SourceConfig;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// User agent sent to the killfeed, which asks clients to identify themselves.
pub const USER_AGENT: &str = concat!("killfeed-relay/", env!("CARGO_PKG_VERSION"));

/// A single failed fetch. Never fatal to the poller.
#[derive(Debug, Error)]
pub enum PollError {
    /// Transport error
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Polls the listen endpoint forever, feeding raw bodies into a queue.
#[derive(Debug, Clone)]
pub struct SourcePoller {
    client: reqwest::Client,
    url: String,
    retry_delay: Duration,
}

impl SourcePoller {
    /// Creates a poller for the configured endpoint.
    pub fn new(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// Returns the polled URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches one listen document.
    pub async fn fetch(&self) -> Result<Vec<u8>, PollError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Runs until shutdown is signalled or the pipeline goes away.
    ///
    /// Failed fetches are logged and retried, after `retry_delay` if one is
    /// configured. When the queue is full the poller waits for room. Dropping
    /// `tx` on return closes the queue, which lets the consumer drain and exit.
    pub async fn run(self, tx: mpsc::Sender<Vec<u8>>, mut shutdown: watch::Receiver<bool>) {
        info!(url = %self.url, "Polling killfeed");

        loop {
            if *shutdown.borrow() {
                break;
            }

            let fetched = tokio::select! {
                _ = shutdown.changed() => break,
                fetched = self.fetch() => fetched,
            };

            match fetched {
                Ok(body) => {
                    debug!(bytes = body.len(), "Fetched listen document");
                    let sent = tokio::select! {
                        _ = shutdown.changed() => break,
                        sent = tx.send(body) => sent,
                    };
                    if sent.is_err() {
                        debug!("Pipeline closed, stopping poller");
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Killfeed fetch failed");
                    if !self.retry_delay.is_zero() {
                        tokio::select! {
                            _ = shutdown.changed() => break,
                            _ = sleep(self.retry_delay) => {}
                        }
                    }
                }
            }
        }

        info!("Poller stopped");
    }
}
