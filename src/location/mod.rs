//! Location provider wiring.
//!
//! The stats app acquires its location provider once at startup and shares it
//! process-wide; nothing in the connectivity path consumes it. The default
//! backend simply holds whatever fix the platform integration last recorded.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

/// A geographic fix as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
    /// Horizontal accuracy radius in meters.
    pub accuracy_m: f32,
}

/// Read-side contract for anything that needs a position.
pub trait LocationProvider: Send + Sync {
    /// Most recent fix, if the platform has delivered one.
    fn last_known(&self) -> Option<GeoFix>;

    /// Short description of the provider backend.
    fn describe(&self) -> String;
}

/// Default provider: stores the last fix recorded by the platform layer.
#[derive(Default)]
pub struct SystemLocationProvider {
    fix: RwLock<Option<GeoFix>>,
}

impl SystemLocationProvider {
    /// Record a fresh fix from the platform layer.
    pub fn record_fix(&self, fix: GeoFix) {
        debug!(lat = fix.lat, lon = fix.lon, "location fix recorded");
        if let Ok(mut guard) = self.fix.write() {
            *guard = Some(fix);
        }
    }
}

impl LocationProvider for SystemLocationProvider {
    fn last_known(&self) -> Option<GeoFix> {
        self.fix.read().ok().and_then(|guard| *guard)
    }

    fn describe(&self) -> String {
        match self.last_known() {
            Some(fix) => format!("system provider, last fix ±{}m", fix.accuracy_m),
            None => "system provider, no fix yet".to_string(),
        }
    }
}

static PROVIDER: Lazy<Arc<SystemLocationProvider>> =
    Lazy::new(|| Arc::new(SystemLocationProvider::default()));

/// Process-wide provider singleton, created on first use.
pub fn provider() -> Arc<SystemLocationProvider> {
    Arc::clone(&PROVIDER)
}
