//! Liveness and readiness probes for container orchestration.
//!
//! The probe routes report the current flag as a bare status code. The
//! toggle routes flip a flag and describe the new value in the body, which
//! lets an operator force a pod to fail its probes and watch the
//! orchestrator restart it or pull it out of load balancing.

use axum::{
    extract::State,
    http::{Method, StatusCode},
};
use tracing::instrument;

use crate::error::ProbeError;
use crate::state::AppState;

fn require_method(expected: Method, got: Method) -> Result<(), ProbeError> {
    if got == expected {
        Ok(())
    } else {
        Err(ProbeError::WrongMethod { expected, got })
    }
}

/// `GET /live`: 200 while live, 503 otherwise.
#[instrument(name = "probes::live", skip(state))]
pub async fn live(
    State(state): State<AppState>,
    method: Method,
) -> Result<StatusCode, ProbeError> {
    require_method(Method::GET, method)?;

    if !state.probes.is_live() {
        tracing::info!("Liveness probe invoked. Pod is NOT live.");
        return Err(ProbeError::NotLive);
    }

    tracing::info!("Liveness probe invoked. Pod is live.");
    Ok(StatusCode::OK)
}

/// `POST /live/toggle`: flips liveness and reports the new value.
#[instrument(name = "probes::toggle_live", skip(state))]
pub async fn toggle_live(
    State(state): State<AppState>,
    method: Method,
) -> Result<String, ProbeError> {
    require_method(Method::POST, method)?;

    let live = state.probes.toggle_live();
    tracing::info!("Toggling pod liveness to {}.", live);

    Ok(format!("Pod {} liveness is now {}", state.probes.hostname(), live))
}

/// `GET /ready`: 200 while ready, 503 otherwise.
#[instrument(name = "probes::ready", skip(state))]
pub async fn ready(
    State(state): State<AppState>,
    method: Method,
) -> Result<StatusCode, ProbeError> {
    require_method(Method::GET, method)?;

    if !state.probes.is_ready() {
        tracing::info!("Readyness probe invoked. Pod is NOT ready.");
        return Err(ProbeError::NotReady);
    }

    tracing::info!("Readyness probe invoked. Pod is ready.");
    Ok(StatusCode::OK)
}

/// `POST /ready/toggle`: flips readiness and reports the new value.
#[instrument(name = "probes::toggle_ready", skip(state))]
pub async fn toggle_ready(
    State(state): State<AppState>,
    method: Method,
) -> Result<String, ProbeError> {
    require_method(Method::POST, method)?;

    let ready = state.probes.toggle_ready();
    tracing::info!("Toggling pod readyness to {}.", ready);

    Ok(format!("Pod {} readyness is now {}", state.probes.hostname(), ready))
}
