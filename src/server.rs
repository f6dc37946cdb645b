//! HTTP server startup.
//!
//! The server listens on every interface at a fixed port and runs until the
//! process is killed. A failed bind is returned to the caller, which treats
//! it as fatal.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

use crate::config::LISTEN_PORT;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// The fixed listen address, `0.0.0.0:8080`.
pub fn listen_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), LISTEN_PORT)
}

/// Bind a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener.
///
/// The startup line is labelled with `pod` like every request log line.
/// This function blocks until the server stops.
pub async fn serve(listener: TcpListener, app: Router, pod: &str) -> Result<(), ServerError> {
    let port = listener.local_addr().map_err(ServerError::Serve)?.port();
    tracing::info_span!("startup", pod = %pod)
        .in_scope(|| tracing::info!("Listening on port {}...", port));

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Bind the fixed listen address and serve `app` on it.
pub async fn start_server(app: Router, pod: &str) -> Result<(), ServerError> {
    let listener = bind(listen_addr()).await?;
    serve(listener, app, pod).await
}
