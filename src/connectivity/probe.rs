//! Live connectivity probing.
//!
//! A background task samples two signals on a fixed interval: whether a
//! routable local interface exists (link layer) and whether the configured
//! health URL answers an HTTP HEAD within the timeout (internet). Results land
//! in a shared snapshot that the facade queries read; internet-reachability
//! transitions are broadcast to `observe` subscribers. Heartbeats that confirm
//! the previous state are not emitted.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ConnectivityConfig;
use crate::connectivity::source::{
    ConnectivityEvents, ConnectivitySource, EVENT_CHANNEL_CAPACITY,
};

/// Coarse interface classification derived from the interface name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceKind {
    Wifi,
    Ethernet,
    Cellular,
    Unknown,
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wifi => write!(f, "wifi"),
            Self::Ethernet => write!(f, "ethernet"),
            Self::Cellular => write!(f, "cellular"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Shared probe state updated by the background task.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LinkSnapshot {
    pub network_available: bool,
    pub internet_reachable: bool,
    pub interface: InterfaceKind,
    /// Unix timestamp of the last completed probe. 0 before the first probe.
    pub last_probe_at: i64,
}

impl Default for LinkSnapshot {
    fn default() -> Self {
        Self {
            network_available: false,
            internet_reachable: false,
            interface: InterfaceKind::Unknown,
            last_probe_at: 0,
        }
    }
}

/// [`ConnectivitySource`] backed by the probe loop.
///
/// Queries answer from the latest snapshot and report `false` until the first
/// probe completes. The probe task is aborted when the source is dropped.
pub struct ProbeSource {
    state: Arc<RwLock<LinkSnapshot>>,
    tx: broadcast::Sender<bool>,
    probe_url: String,
    handle: JoinHandle<()>,
}

impl ProbeSource {
    /// Spawn the probe loop. Must be called from within a Tokio runtime.
    pub fn start(config: &ConnectivityConfig) -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let state = Arc::new(RwLock::new(LinkSnapshot::default()));
        let handle = tokio::spawn(run_probe(
            config.probe_url.clone(),
            Duration::from_secs(config.probe_interval_secs),
            Duration::from_secs(config.probe_timeout_secs),
            Arc::clone(&state),
            tx.clone(),
        ));
        info!(
            url = %config.probe_url,
            interval_secs = config.probe_interval_secs,
            "connectivity probe started"
        );
        Self {
            state,
            tx,
            probe_url: config.probe_url.clone(),
            handle,
        }
    }

    /// Latest full snapshot: both booleans plus interface kind and probe time.
    pub fn snapshot(&self) -> LinkSnapshot {
        self.state.read().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Drop for ProbeSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl ConnectivitySource for ProbeSource {
    fn is_network_available(&self) -> bool {
        self.state.read().map(|s| s.network_available).unwrap_or(false)
    }

    fn has_internet_connectivity(&self) -> bool {
        self.state.read().map(|s| s.internet_reachable).unwrap_or(false)
    }

    fn observe(&self) -> ConnectivityEvents {
        ConnectivityEvents::new(self.tx.subscribe())
    }

    fn describe(&self) -> String {
        let snap = self.snapshot();
        if snap.last_probe_at == 0 {
            return "unknown".to_string();
        }
        if !snap.network_available {
            return "no active interface".to_string();
        }
        format!("{} via {}", snap.interface, self.probe_url)
    }
}

async fn run_probe(
    probe_url: String,
    interval: Duration,
    timeout: Duration,
    state: Arc<RwLock<LinkSnapshot>>,
    tx: broadcast::Sender<bool>,
) {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default();
    let mut ticker = tokio::time::interval(interval);
    let mut was_online: Option<bool> = None;

    loop {
        ticker.tick().await;

        let (link_up, interface) = sample_link();
        // Use an HTTP HEAD request as a lightweight reachability check; skip
        // it entirely when no interface is up.
        let online = if link_up {
            client.head(&probe_url).send().await.is_ok()
        } else {
            false
        };

        debug!(link_up, online, iface = %interface, "connectivity probe");

        if let Ok(mut snap) = state.write() {
            *snap = LinkSnapshot {
                network_available: link_up,
                internet_reachable: online,
                interface,
                last_probe_at: chrono::Utc::now().timestamp(),
            };
        }

        if was_online != Some(online) {
            if online {
                info!(iface = %interface, "internet reachable");
            } else if was_online.is_some() {
                warn!(link_up, "internet unreachable");
            }
            // No subscribers is fine.
            let _ = tx.send(online);
        }
        was_online = Some(online);
    }
}

/// Link-layer check: does any routable (non-loopback) interface exist?
fn sample_link() -> (bool, InterfaceKind) {
    match local_ip_address::local_ip() {
        Ok(_) => (true, current_interface()),
        Err(_) => (false, InterfaceKind::Unknown),
    }
}

/// Best-effort classification of the first non-loopback interface.
fn current_interface() -> InterfaceKind {
    let Ok(ifas) = local_ip_address::list_afinet_netifas() else {
        return InterfaceKind::Unknown;
    };
    for (name, addr) in ifas {
        if addr.is_loopback() {
            continue;
        }
        return classify_interface(&name);
    }
    InterfaceKind::Unknown
}

/// Map platform interface names to a coarse kind.
fn classify_interface(name: &str) -> InterfaceKind {
    let lower = name.to_ascii_lowercase();
    if lower.starts_with("wl") || lower.starts_with("wifi") || lower.starts_with("ath") {
        InterfaceKind::Wifi
    } else if lower.starts_with("en") || lower.starts_with("eth") {
        // macOS names Wi-Fi en0 too; without SSID data en* counts as ethernet.
        InterfaceKind::Ethernet
    } else if lower.starts_with("rmnet") || lower.starts_with("ww") || lower.starts_with("pdp") {
        InterfaceKind::Cellular
    } else {
        InterfaceKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A source whose probe task never runs — state stays at the default.
    fn idle_source() -> ProbeSource {
        let (tx, _) = broadcast::channel(8);
        ProbeSource {
            state: Arc::new(RwLock::new(LinkSnapshot::default())),
            tx,
            probe_url: "https://example.test/health".to_string(),
            handle: tokio::spawn(async {}),
        }
    }

    #[tokio::test]
    async fn queries_report_false_before_first_probe() {
        let source = idle_source();
        assert!(!source.is_network_available());
        assert!(!source.has_internet_connectivity());
    }

    #[tokio::test]
    async fn describe_reports_unknown_before_first_probe() {
        assert_eq!(idle_source().describe(), "unknown");
    }

    #[tokio::test]
    async fn describe_reports_interface_and_target_after_probe() {
        let source = idle_source();
        {
            let mut snap = source.state.write().unwrap();
            *snap = LinkSnapshot {
                network_available: true,
                internet_reachable: true,
                interface: InterfaceKind::Wifi,
                last_probe_at: 1_700_000_000,
            };
        }
        assert_eq!(source.describe(), "wifi via https://example.test/health");
    }

    #[test]
    fn default_snapshot_is_fully_offline() {
        let snap = LinkSnapshot::default();
        assert!(!snap.network_available);
        assert!(!snap.internet_reachable);
        assert_eq!(snap.interface, InterfaceKind::Unknown);
        assert_eq!(snap.last_probe_at, 0);
    }

    #[test]
    fn interface_classification() {
        assert_eq!(classify_interface("wlan0"), InterfaceKind::Wifi);
        assert_eq!(classify_interface("wlp3s0"), InterfaceKind::Wifi);
        assert_eq!(classify_interface("eth0"), InterfaceKind::Ethernet);
        assert_eq!(classify_interface("en0"), InterfaceKind::Ethernet);
        assert_eq!(classify_interface("rmnet0"), InterfaceKind::Cellular);
        assert_eq!(classify_interface("wwan0"), InterfaceKind::Cellular);
        assert_eq!(classify_interface("tun0"), InterfaceKind::Unknown);
    }

    #[test]
    fn interface_kind_display() {
        assert_eq!(InterfaceKind::Wifi.to_string(), "wifi");
        assert_eq!(InterfaceKind::Ethernet.to_string(), "ethernet");
        assert_eq!(InterfaceKind::Cellular.to_string(), "cellular");
        assert_eq!(InterfaceKind::Unknown.to_string(), "unknown");
    }
}
