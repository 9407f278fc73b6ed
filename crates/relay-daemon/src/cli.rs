//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use relay::{ConfigError, RelayConfig, WatchSet};

/// What the binary does after parsing its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Startup {
    /// Print the default configuration file and exit.
    PrintDefaultConfig,
    /// Nothing to watch: print usage and exit without starting the pipeline.
    Usage,
    /// Start the pipeline with the merged configuration.
    Run(RelayConfig),
}

/// Relays zKillboard kills involving watched entities to a chat webhook.
#[derive(Parser, Debug, Default)]
#[command(name = "killfeed-relay")]
#[command(about = "Relays zKillboard kills involving watched characters, corporations or alliances")]
pub struct Args {
    /// Comma-separated list of character names or IDs
    #[arg(long = "char", default_value = "")]
    pub characters: String,

    /// Comma-separated list of corporation names or IDs
    #[arg(long = "corp", default_value = "")]
    pub corporations: String,

    /// Comma-separated list of alliance names or IDs
    #[arg(long = "all", default_value = "")]
    pub alliances: String,

    /// Discord webhook URL (messages are only printed when unset)
    #[arg(long)]
    pub discord: Option<String>,

    /// TOML configuration file; command line values are merged on top
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Killfeed listen endpoint
    #[arg(long)]
    pub source_url: Option<String>,

    /// Capacity of the queue between poller and pipeline
    #[arg(long)]
    pub queue_capacity: Option<usize>,

    /// Feed listen documents from a JSONL file instead of polling
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Print a default configuration file and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl Args {
    /// Watch set given on the command line.
    pub fn watch_set(&self) -> WatchSet {
        WatchSet::parse(&self.characters, &self.corporations, &self.alliances)
    }

    /// Loads the config file, if any, and applies the command line on top.
    pub fn load_config(&self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RelayConfig::from_file(path)?,
            None => RelayConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Decides how the process starts.
    pub fn startup(&self) -> Result<Startup, ConfigError> {
        if self.print_default_config {
            return Ok(Startup::PrintDefaultConfig);
        }
        let config = self.load_config()?;
        if config.watch.is_empty() {
            return Ok(Startup::Usage);
        }
        Ok(Startup::Run(config))
    }

    /// Adds command line watch tokens and replaces any other value given.
    pub fn apply_overrides(&self, config: &mut RelayConfig) {
        config.watch.merge(&self.watch_set());
        if let Some(url) = &self.discord {
            config.webhook.url = url.clone();
        }
        if let Some(url) = &self.source_url {
            config.source.url = url.clone();
        }
        if let Some(capacity) = self.queue_capacity {
            config.source.queue_capacity = capacity;
        }
    }
}
