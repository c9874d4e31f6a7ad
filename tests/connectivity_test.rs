//! Facade behavior over a scripted connectivity source.
//!
//! Covers the diagnostic precedence end to end plus the observe subscription
//! lifecycle: ordered delivery, independence between subscribers, no
//! historical replay, and silence after unsubscribing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use courtside::connectivity::{
    ConnectivityEvents, ConnectivityFacade, ConnectivitySource, MSG_NO_INTERNET, MSG_NO_NETWORK,
    MSG_SERVER_ISSUE,
};
use tokio::sync::broadcast;
use tokio_stream::StreamExt;

struct ScriptedSource {
    network: AtomicBool,
    internet: AtomicBool,
    tx: broadcast::Sender<bool>,
}

impl ScriptedSource {
    fn new(network: bool, internet: bool) -> Arc<Self> {
        let (tx, _) = broadcast::channel(16);
        Arc::new(Self {
            network: AtomicBool::new(network),
            internet: AtomicBool::new(internet),
            tx,
        })
    }

    /// Emit a transition; returns the number of subscribers that received it.
    fn emit(&self, online: bool) -> usize {
        self.tx.send(online).unwrap_or(0)
    }

    fn set_state(&self, network: bool, internet: bool) {
        self.network.store(network, Ordering::SeqCst);
        self.internet.store(internet, Ordering::SeqCst);
    }
}

impl ConnectivitySource for ScriptedSource {
    fn is_network_available(&self) -> bool {
        self.network.load(Ordering::SeqCst)
    }

    fn has_internet_connectivity(&self) -> bool {
        self.internet.load(Ordering::SeqCst)
    }

    fn observe(&self) -> ConnectivityEvents {
        ConnectivityEvents::new(self.tx.subscribe())
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

// ─── Diagnostic precedence ────────────────────────────────────────────────────

#[tokio::test]
async fn diagnostic_follows_source_transitions() {
    let source = ScriptedSource::new(false, false);
    let facade = ConnectivityFacade::new(source.clone());

    assert_eq!(facade.diagnostic_message(), MSG_NO_NETWORK);

    source.set_state(true, false);
    assert_eq!(facade.diagnostic_message(), MSG_NO_INTERNET);

    source.set_state(true, true);
    assert_eq!(facade.diagnostic_message(), MSG_SERVER_ISSUE);
}

// ─── Subscription lifecycle ───────────────────────────────────────────────────

#[tokio::test]
async fn observe_preserves_emission_order() {
    let source = ScriptedSource::new(true, true);
    let facade = ConnectivityFacade::new(source.clone());

    let mut events = facade.observe_connectivity();
    source.emit(true);
    source.emit(false);
    source.emit(true);

    assert_eq!(events.recv().await, Some(true));
    assert_eq!(events.recv().await, Some(false));
    assert_eq!(events.recv().await, Some(true));

    // Exactly three events — nothing extra is pending.
    let extra = tokio::time::timeout(Duration::from_millis(50), events.recv()).await;
    assert!(extra.is_err(), "no further events expected");
}

#[tokio::test]
async fn unsubscribe_stops_delivery() {
    let source = ScriptedSource::new(true, true);
    let facade = ConnectivityFacade::new(source.clone());

    let events = facade.observe_connectivity();
    assert_eq!(source.emit(true), 1);

    events.unsubscribe();
    // The source keeps emitting; with the subscription gone nobody receives.
    assert_eq!(source.emit(false), 0);
}

#[tokio::test]
async fn subscribers_are_independent() {
    let source = ScriptedSource::new(true, true);
    let facade = ConnectivityFacade::new(source.clone());

    let mut first = facade.observe_connectivity();
    let mut second = facade.observe_connectivity();
    assert_eq!(source.emit(false), 2);

    assert_eq!(first.recv().await, Some(false));
    assert_eq!(second.recv().await, Some(false));

    // Dropping one subscription leaves the other delivering.
    drop(first);
    assert_eq!(source.emit(true), 1);
    assert_eq!(second.recv().await, Some(true));
}

#[tokio::test]
async fn no_historical_replay_for_late_subscribers() {
    let source = ScriptedSource::new(true, true);
    let facade = ConnectivityFacade::new(source.clone());

    // Emitted before anyone subscribed — lost by contract.
    source.emit(false);

    let mut events = facade.observe_connectivity();
    source.emit(true);

    assert_eq!(events.recv().await, Some(true));
    let extra = tokio::time::timeout(Duration::from_millis(50), events.recv()).await;
    assert!(extra.is_err(), "past events must not replay");
}

#[tokio::test]
async fn subscription_works_as_a_stream() {
    let source = ScriptedSource::new(true, true);
    let facade = ConnectivityFacade::new(source.clone());

    let mut stream = facade.observe_connectivity().into_stream();
    source.emit(true);
    source.emit(false);

    assert_eq!(stream.next().await.and_then(|r| r.ok()), Some(true));
    assert_eq!(stream.next().await.and_then(|r| r.ok()), Some(false));
}

// ─── Live probe ───────────────────────────────────────────────────────────────

/// Live probe against a real endpoint.
#[tokio::test]
#[ignore = "requires outbound network access"]
async fn probe_source_reaches_live_endpoint() {
    let cfg = courtside::config::ConnectivityConfig {
        probe_url: "https://www.google.com".to_string(),
        probe_interval_secs: 1,
        probe_timeout_secs: 5,
    };
    let source = courtside::connectivity::ProbeSource::start(&cfg);
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(source.is_network_available());
    assert!(source.has_internet_connectivity());
}
