//! Connectivity awareness — source contract, probe loop, and facade.
//!
//! ## Submodules
//!
//! - `source` — the [`ConnectivitySource`] contract and subscription stream
//! - `probe` — background HTTP probe implementing the source from live signals
//! - `facade` — stable query surface consumed by the rest of the app
//!
//! ## Usage
//!
//! The [`crate::AppContext`] starts one [`ProbeSource`] and wraps it in a
//! [`ConnectivityFacade`]. Callers query the facade or subscribe to
//! transitions; the facade never buffers, reorders, or fails.

pub mod facade;
pub mod probe;
pub mod source;

pub use facade::{ConnectivityFacade, MSG_NO_INTERNET, MSG_NO_NETWORK, MSG_SERVER_ISSUE};
pub use probe::{InterfaceKind, LinkSnapshot, ProbeSource};
pub use source::{ConnectivityEvents, ConnectivitySource, ConnectivityState};
