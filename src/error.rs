use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Request-level failures of the probe routes.
///
/// All of them answer with a bare status code and no body, which is all an
/// orchestrator looks at.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Method {got} not allowed, expected {expected}")]
    WrongMethod { expected: Method, got: Method },

    #[error("Pod is not live")]
    NotLive,

    #[error("Pod is not ready")]
    NotReady,
}

impl ProbeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProbeError::WrongMethod { .. } => StatusCode::BAD_REQUEST,
            ProbeError::NotLive | ProbeError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ProbeError {
    fn into_response(self) -> Response {
        if let ProbeError::WrongMethod { .. } = &self {
            tracing::warn!(error = %self, "Rejected request");
        }
        self.status().into_response()
    }
}
