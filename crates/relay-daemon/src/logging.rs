//! Logging setup.

use tracing_subscriber::filter::EnvFilter;

/// Environment variable naming a log file to append to.
pub const LOG_PATH_ENV: &str = "KILLFEED_RELAY_LOG_PATH";

/// Initialize logging, writing to `KILLFEED_RELAY_LOG_PATH` if set, otherwise stderr.
///
/// Stdout is left to the notification lines. The level comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var(LOG_PATH_ENV) {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
