//! Relay core: killmail relevance filtering and notification text.
//!
//! The relay sits between the killfeed poller and the webhook sender. It
//! looks at every decoded killmail, decides whether it concerns a watched
//! character, corporation or alliance, and renders one line of text for it.
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐  raw bytes  ┌────────────────────────────────────────┐  text  ┌────────┐
//! │ poller │ ──────────▶ │ decode → filter → rank → format (Relay) │ ─────▶ │ sender │
//! └────────┘             └────────────────────────────────────────┘        └────────┘
//! ```
//!
//! # Modules
//!
//! - [`matcher`]: Watch-lists and entity matching
//! - [`filter`]: Watched attackers and victim of a killmail
//! - [`ranker`]: Display order of watched attackers
//! - [`formatter`]: Kill and loss message text
//! - [`config`]: TOML configuration

pub mod config;
pub mod filter;
pub mod formatter;
pub mod matcher;
pub mod ranker;

pub use config::{
    default_config_toml, ConfigError, RelayConfig, SourceConfig, TomlSerializeError,
    WebhookConfig, DEFAULT_SOURCE_URL,
};
pub use filter::{attacker_is_relevant, relevant_attackers, relevant_victim, victim_is_relevant};
pub use formatter::{format_isk, format_kill_message, format_loss_message};
pub use matcher::{is_relevant, WatchList, WatchSet};
pub use ranker::rank;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zkb_events::{decode_package, ZkbPackage};

/// Which side of the kill the watched entity was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A watched attacker took part in the kill
    Kill,
    /// The watched victim died and no watched attacker took part
    Loss,
}

/// A rendered notification for one killmail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub kill_id: i64,
    pub content: String,
}

/// Per-process counters kept by the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelayStats {
    /// Raw documents handed to the relay
    pub received: u64,
    /// Documents that did not decode to a kill
    pub discarded: u64,
    /// Kills that concerned nobody on the watch-lists
    pub dropped: u64,
    /// Kill notifications produced
    pub kills: u64,
    /// Loss notifications produced
    pub losses: u64,
}

impl RelayStats {
    /// Records the outcome of one raw document.
    pub fn record(&mut self, decoded: bool, outcome: Option<&Notification>) {
        self.received += 1;
        match (decoded, outcome.map(|n| n.kind)) {
            (false, _) => self.discarded += 1,
            (true, None) => self.dropped += 1,
            (true, Some(NotificationKind::Kill)) => self.kills += 1,
            (true, Some(NotificationKind::Loss)) => self.losses += 1,
        }
    }
}

/// The relevance pipeline.
///
/// Holds only the read-only watch set, so one `Relay` can process any number
/// of killmails in sequence without carrying state between them.
#[derive(Debug, Clone)]
pub struct Relay {
    watch: WatchSet,
}

impl Relay {
    /// Creates a relay for the given watch set.
    pub fn new(watch: WatchSet) -> Self {
        Self { watch }
    }

    /// Creates a relay from a full configuration.
    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.watch.clone())
    }

    /// Returns the watch set.
    pub fn watch(&self) -> &WatchSet {
        &self.watch
    }

    /// Decodes and normalizes a raw listen document.
    ///
    /// Returns `None` for anything that is not a kill. NPC attackers are
    /// stripped before the package is returned.
    pub fn decode(&self, raw: &[u8]) -> Option<ZkbPackage> {
        let mut package = decode_package(raw)?;
        let npcs = package.strip_npcs();
        debug!(kill_id = package.kill_id, npcs, "Decoded killmail");
        Some(package)
    }

    /// Decodes, normalizes and processes a raw listen document.
    pub fn process_raw(&self, raw: &[u8]) -> Option<Notification> {
        let package = self.decode(raw)?;
        self.process(&package)
    }

    /// Processes one decoded killmail.
    ///
    /// This is the main entry point for the relay. It:
    /// 1. Filters the watched attackers and the victim
    /// 2. If any attacker is watched, ranks them and renders a kill message
    /// 3. Otherwise, if the victim is watched, renders a loss message
    /// 4. Otherwise returns `None`
    ///
    /// At most one notification is produced per killmail.
    pub fn process(&self, package: &ZkbPackage) -> Option<Notification> {
        let attackers = relevant_attackers(package, &self.watch);

        if !attackers.is_empty() {
            let ranked = rank(attackers);
            debug!(kill_id = package.kill_id, watched = ranked.len(), "Watched attackers on kill");
            return Some(Notification {
                kind: NotificationKind::Kill,
                kill_id: package.kill_id,
                content: format_kill_message(package, &ranked),
            });
        }

        if let Some(victim) = relevant_victim(package, &self.watch) {
            debug!(kill_id = package.kill_id, "Watched victim on kill");
            return Some(Notification {
                kind: NotificationKind::Loss,
                kill_id: package.kill_id,
                content: format_loss_message(package, victim),
            });
        }

        debug!(kill_id = package.kill_id, "Kill not relevant");
        None
    }
}
