//! Stable query surface over a connectivity source.
//!
//! The facade is a passthrough: it owns no mutable state, spawns nothing, and
//! never fails. Its one piece of logic is [`ConnectivityFacade::diagnostic_message`],
//! which folds the two reachability booleans into a fixed user-facing string.

use std::sync::Arc;

use crate::connectivity::source::{ConnectivityEvents, ConnectivitySource, ConnectivityState};

/// Shown when no network interface is available.
pub const MSG_NO_NETWORK: &str =
    "No network connection available. Please check your internet connection.";
/// Shown when an interface exists but remote probes fail.
pub const MSG_NO_INTERNET: &str =
    "Unable to connect to servers. Please check your internet connection.";
/// Shown when both signals look healthy but an operation still failed.
pub const MSG_SERVER_ISSUE: &str = "Connection issue. Please try again.";

/// Read-only view of the connectivity source shared across the app.
#[derive(Clone)]
pub struct ConnectivityFacade {
    source: Arc<dyn ConnectivitySource>,
}

impl ConnectivityFacade {
    pub fn new(source: Arc<dyn ConnectivitySource>) -> Self {
        Self { source }
    }

    /// Current link-layer reachability.
    pub fn is_network_available(&self) -> bool {
        self.source.is_network_available()
    }

    /// Current verified internet reachability.
    pub fn has_internet_connectivity(&self) -> bool {
        self.source.has_internet_connectivity()
    }

    /// Subscribe to connectivity transitions.
    ///
    /// Pure passthrough: each subscriber receives events independently, in
    /// source emission order, with no historical replay, no extra buffering,
    /// and no backpressure policy beyond the source's own.
    pub fn observe_connectivity(&self) -> ConnectivityEvents {
        self.source.observe()
    }

    /// Human-readable description of the current connection.
    pub fn describe_connection(&self) -> String {
        self.source.describe()
    }

    /// Both reachability booleans read back to back.
    ///
    /// Two independent reads, not an atomic snapshot — a transition between
    /// them can surface a pair no single instant exhibited.
    pub fn current_state(&self) -> ConnectivityState {
        ConnectivityState {
            network_available: self.is_network_available(),
            internet_reachable: self.has_internet_connectivity(),
        }
    }

    /// User-facing message for the current connectivity. First match wins:
    /// no interface, then interface without internet, then a generic fallback
    /// for failures that happen while both signals look fine.
    ///
    /// The two booleans are re-queried independently on every call, so the
    /// result is best-effort under concurrent transitions.
    pub fn diagnostic_message(&self) -> &'static str {
        if !self.is_network_available() {
            MSG_NO_NETWORK
        } else if !self.has_internet_connectivity() {
            MSG_NO_INTERNET
        } else {
            MSG_SERVER_ISSUE
        }
    }
}
