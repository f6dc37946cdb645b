//! Pod identity endpoint.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// `/pod`, any method: names the pod that served the request.
#[instrument(name = "pod::pod", skip(state))]
pub async fn pod(State(state): State<AppState>) -> String {
    format!("request was handled by pod {}", state.probes.hostname())
}
