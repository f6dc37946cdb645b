//! Shared application state for request handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The two probe flags plus the pod identity.
///
/// Both flags start out `true`. Flips are single atomic read-modify-write
/// operations, so concurrent toggles never lose an update.
#[derive(Debug)]
pub struct ProbeState {
    live: AtomicBool,
    ready: AtomicBool,
    hostname: String,
}

impl ProbeState {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            live: AtomicBool::new(true),
            ready: AtomicBool::new(true),
            hostname: hostname.into(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Flips liveness and returns the new value.
    pub fn toggle_live(&self) -> bool {
        flip(&self.live)
    }

    /// Flips readiness and returns the new value.
    pub fn toggle_ready(&self) -> bool {
        flip(&self.ready)
    }
}

fn flip(flag: &AtomicBool) -> bool {
    // fetch_xor hands back the previous value
    !flag.fetch_xor(true, Ordering::AcqRel)
}

/// Shared application state, cloneable across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub probes: Arc<ProbeState>,
}

impl AppState {
    /// Creates a new application state for the given pod identity.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            probes: Arc::new(ProbeState::new(hostname)),
        }
    }
}
