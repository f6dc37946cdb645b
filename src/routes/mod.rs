//! HTTP route handlers.
//!
//! Every route is registered for all methods; the probe and toggle handlers
//! check the method themselves so anything other than the expected one,
//! HEAD included, is answered with 400. Responses are never cacheable.
//!
//! Request tracing is enabled via middleware that opens a span per request
//! carrying a request id and the pod identity.

pub mod pod;
pub mod probes;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the Axum router with the probe, toggle and pod routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/live", any(probes::live))
        .route("/live/toggle", any(probes::toggle_live))
        .route("/ready", any(probes::ready))
        .route("/ready/toggle", any(probes::toggle_ready))
        .route("/pod", any(pod::pod))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ))
        .with_state(state.clone())
        // Request span middleware - root span with request_id and pod for correlation
        .layer(middleware::from_fn_with_state(state, request_span_layer))
}
