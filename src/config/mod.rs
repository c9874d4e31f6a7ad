//! Configuration: `config.toml` with CLI/env overrides applied by the binary.

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PROBE_URL: &str = "https://api.courtside.dev/health";
const DEFAULT_PROBE_INTERVAL_SECS: u64 = 30;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_API_BASE_URL: &str = "https://api.courtside.dev";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ─── ConnectivityConfig ──────────────────────────────────────────────────────

/// Connectivity probing configuration (`[connectivity]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    /// URL probed with an HTTP HEAD to verify internet reachability.
    pub probe_url: String,
    /// Seconds between probes. Default: 30.
    pub probe_interval_secs: u64,
    /// Per-probe timeout in seconds. Default: 5.
    pub probe_timeout_secs: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_url: DEFAULT_PROBE_URL.to_string(),
            probe_interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

// ─── StatsConfig ─────────────────────────────────────────────────────────────

/// Stats service configuration (`[stats]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Base URL of the stats HTTP service.
    pub api_base_url: String,
    /// Request timeout in seconds. Default: 10.
    pub request_timeout_secs: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

// ─── AppConfig ───────────────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log: String,
    /// Connectivity probing (`[connectivity]`).
    pub connectivity: ConnectivityConfig,
    /// Stats service client (`[stats]`).
    pub stats: StatsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: DEFAULT_LOG_LEVEL.to_string(),
            connectivity: ConnectivityConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error — silently ignoring a broken config hides typos.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }
}
