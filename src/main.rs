//! Game server: a status endpoint.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! listening port from the environment, builds the router and serves until the
//! process is killed. A bind failure is logged and exits with status 1.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_server::config::{ServerConfig, DEFAULT_LOG_FILTER};
use game_server::{create_router, start_server};

#[tokio::main]
async fn main() {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env();
    let app = create_router();

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Game server stopped");
        std::process::exit(1);
    }
}
