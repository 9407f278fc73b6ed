//! Process shell around the relay core.
//!
//! Owns everything that talks to the outside world: the command line, the
//! killfeed poller, the replay reader, the webhook sender and the task
//! wiring between them.
//!
//! # Modules
//!
//! - [`cli`]: Command line arguments and config merging
//! - [`logging`]: tracing subscriber setup
//! - [`poller`]: RedisQ long-poll producer
//! - [`replay`]: JSONL file producer
//! - [`sender`]: Stdout and webhook delivery
//! - [`runner`]: Producer → queue → consumer wiring

pub mod cli;
pub mod logging;
pub mod poller;
pub mod replay;
pub mod runner;
pub mod sender;

pub use cli::{Args, Startup};
pub use poller::{PollError, SourcePoller};
pub use replay::replay_file;
pub use runner::{consume, run};
pub use sender::{Sink, WebhookMessage, WebhookSender};

use relay::ConfigError;
use thiserror::Error;

/// Errors that stop the daemon.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Error loading configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Error building the HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    /// IO error (replay file, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A producer task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}
