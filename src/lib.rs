//! podprobe: togglable liveness and readiness probes.
//!
//! Serves `/live`, `/ready`, their `/toggle` counterparts and `/pod` so an
//! operator can make a pod fail its probes on demand and observe how the
//! orchestrator reacts.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ProbeError;
pub use routes::create_router;
pub use state::{AppState, ProbeState};
