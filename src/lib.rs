//! Courtside companion service — connectivity awareness for the stats app.
//!
//! Three collaborators are wired at a single composition root
//! ([`AppContext`]): a probing connectivity source behind the
//! [`connectivity::ConnectivityFacade`], the process-wide location provider,
//! and the typed stats API client. There is no runtime container — wiring is
//! plain constructors, leaves first.

pub mod config;
pub mod connectivity;
pub mod location;
pub mod stats;

use std::sync::Arc;

use config::AppConfig;
use connectivity::{ConnectivityFacade, ProbeSource};
use location::SystemLocationProvider;
use stats::StatsClient;

/// Shared application state. Everything lives behind an `Arc`; cloning the
/// context is cheap.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// Query surface over the connectivity probe.
    pub connectivity: Arc<ConnectivityFacade>,
    /// Process-wide location provider.
    pub location: Arc<SystemLocationProvider>,
    /// Typed client for the stats endpoint.
    pub stats: Arc<StatsClient>,
}

impl AppContext {
    /// Wire the application, leaves first. Must run inside a Tokio runtime:
    /// the connectivity probe spawns its background task here.
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let source = Arc::new(ProbeSource::start(&config.connectivity));
        let connectivity = Arc::new(ConnectivityFacade::new(source));
        let location = location::provider();
        let stats = Arc::new(StatsClient::new(&config.stats));
        Self {
            config,
            connectivity,
            location,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn context_wires_all_collaborators() {
        let ctx = AppContext::new(AppConfig::default());
        // Whatever the probe has (or has not) observed so far, the facade
        // always answers with one of the three fixed messages.
        let msg = ctx.connectivity.diagnostic_message();
        assert!([
            connectivity::MSG_NO_NETWORK,
            connectivity::MSG_NO_INTERNET,
            connectivity::MSG_SERVER_ISSUE
        ]
        .contains(&msg));
        let clone = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.config, &clone.config));
        assert!(Arc::ptr_eq(&ctx.location, &clone.location));
    }
}
