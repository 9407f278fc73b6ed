//! killfeed-relay
//!
//! Watches the zKillboard killfeed and relays kills involving watched
//! characters, corporations or alliances to a chat webhook.
//!
//! Examples:
//!   killfeed-relay --char "Bob Nobody" --discord https://discord.com/api/webhooks/...
//!   killfeed-relay --config relay.toml
//!   killfeed-relay --corp 98000001 --replay kills.jsonl

use clap::{CommandFactory, Parser};
use relay::default_config_toml;
use relay_daemon::{logging, run, Args, DaemonError, Startup};

#[tokio::main]
async fn main() -> Result<(), DaemonError> {
    let args = Args::parse();

    let config = match args.startup()? {
        Startup::PrintDefaultConfig => {
            print!("{}", default_config_toml());
            return Ok(());
        }
        Startup::Usage => {
            Args::command().print_help()?;
            return Ok(());
        }
        Startup::Run(config) => config,
    };

    logging::init_logging();
    run(config, args.replay).await?;
    Ok(())
}
