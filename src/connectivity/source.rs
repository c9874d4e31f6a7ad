//! The connectivity source contract.
//!
//! A source reports two boolean reachability signals — link-layer (an active
//! interface exists) and internet (a remote endpoint answered) — and hands out
//! live subscriptions to reachability transitions. The facade in
//! [`super::facade`] is a passthrough over this trait; [`super::probe`] holds
//! the production implementation.

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;

/// Capacity of the transition broadcast channel. A subscriber that falls more
/// than this far behind misses the oldest events.
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// A point-in-time reachability snapshot. Created per read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ConnectivityState {
    /// An active network interface exists (link-layer reachability).
    pub network_available: bool,
    /// A remote endpoint answered a probe (verified internet reachability).
    pub internet_reachable: bool,
}

/// Raw reachability signals consumed by the facade.
///
/// Queries are side-effect-free and never fail: a source that cannot answer
/// reports `false`. Subscriptions are independent per caller and carry no
/// historical replay — a new subscriber sees only emissions that happen after
/// it subscribed, in the source's emission order.
pub trait ConnectivitySource: Send + Sync {
    /// Whether an active network interface exists right now.
    fn is_network_available(&self) -> bool;

    /// Whether a remote endpoint is currently reachable.
    fn has_internet_connectivity(&self) -> bool;

    /// Subscribe to internet-reachability transitions.
    fn observe(&self) -> ConnectivityEvents;

    /// Short human-readable description of the current connection.
    fn describe(&self) -> String;
}

/// A live subscription to connectivity transitions.
///
/// Dropping the subscription (or calling [`unsubscribe`](Self::unsubscribe))
/// stops delivery immediately; the source keeps emitting for everyone else.
pub struct ConnectivityEvents {
    rx: broadcast::Receiver<bool>,
}

impl ConnectivityEvents {
    /// Wrap a broadcast receiver handed out by a source.
    pub fn new(rx: broadcast::Receiver<bool>) -> Self {
        Self { rx }
    }

    /// Receive the next transition. Returns `None` once the source is gone.
    pub async fn recv(&mut self) -> Option<bool> {
        loop {
            match self.rx.recv().await {
                Ok(online) => return Some(online),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    debug!(missed, "connectivity subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Adapt the subscription into a `Stream`.
    ///
    /// Items are `Result<bool, BroadcastStreamRecvError>`; the error case only
    /// surfaces when the subscriber lagged past the channel capacity.
    pub fn into_stream(self) -> BroadcastStream<bool> {
        BroadcastStream::new(self.rx)
    }

    /// End the subscription. Equivalent to dropping it.
    pub fn unsubscribe(self) {}
}
