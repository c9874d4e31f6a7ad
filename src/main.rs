//! courtside — foreground connectivity watcher for the stats app.
//!
//! Loads config, starts the probe loop, and logs every connectivity
//! transition together with the user-facing diagnostic message until ctrl-c.

use anyhow::{Context as _, Result};
use clap::Parser;
use courtside::config::AppConfig;
use courtside::AppContext;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "courtside",
    about = "Courtside companion service — connectivity watcher",
    version
)]
struct Args {
    /// Path to config.toml
    #[arg(long, env = "COURTSIDE_CONFIG", default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Override the reachability probe URL
    #[arg(long, env = "COURTSIDE_PROBE_URL")]
    probe_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COURTSIDE_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(url) = args.probe_url {
        config.connectivity.probe_url = url;
    }
    if let Some(level) = args.log {
        config.log = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.log.as_str())
        .compact()
        .init();

    let ctx = AppContext::new(config);
    info!(
        connection = %ctx.connectivity.describe_connection(),
        "courtside started"
    );

    let mut events = ctx.connectivity.observe_connectivity();
    loop {
        tokio::select! {
            maybe = events.recv() => {
                match maybe {
                    Some(true) => info!(
                        connection = %ctx.connectivity.describe_connection(),
                        "connectivity restored"
                    ),
                    Some(false) => warn!(
                        message = ctx.connectivity.diagnostic_message(),
                        "connectivity lost"
                    ),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
