//! podprobe: togglable liveness and readiness probes.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional configuration file, resolves the pod identity, builds the Axum
//! router and serves it on the fixed probe port.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podprobe::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use podprobe::routes::create_router;
use podprobe::server::{start_server, ServerError};
use podprobe::state::AppState;

/// podprobe: Togglable liveness and readiness probes
#[derive(Parser, Debug)]
#[command(name = "podprobe", version, about)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "podprobe=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<String>, logging: &LoggingConfig) {
    // Priority: CLI > env > config file > default
    let log_filter = log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| logging.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    init_tracing(args.log_level, &config.logging);

    // Identity is read once; handlers only ever see this value
    let hostname = config.identity.resolve();
    tracing::info!(
        pod = %hostname,
        env_var = %config.identity.env_var,
        "Resolved pod identity"
    );

    let state = AppState::new(hostname.clone());
    let app = create_router(state);

    match start_server(app, &hostname).await {
        Ok(()) => Ok(()),
        Err(e @ ServerError::Bind { .. }) => {
            tracing::error!(pod = %hostname, error = %e, "Unable to start probe server");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
