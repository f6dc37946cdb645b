//! Request span middleware.
//!
//! Every request runs inside a span labelled with a fresh request id and the
//! pod identity, so each probe and toggle log line names the pod that
//! emitted it.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// Wraps the request in a `request` span carrying `request_id` and `pod`.
///
/// Must be the outermost layer so the span also covers rejected methods.
pub async fn request_span_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        pod = %state.probes.hostname(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        tracing::debug!(status = response.status().as_u16(), "Request completed");
        response
    }
    .instrument(span)
    .await
}
