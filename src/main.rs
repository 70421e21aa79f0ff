//! Mock backend fixture entry point.
//!
//! Binds `0.0.0.0` on the port from the `PORT` environment variable (default
//! 9999) and answers every HTTP request with a JSON echo of its path and
//! method, plus the CORS/marker headers of the configured policy.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock_backend::config::loader;
use mock_backend::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("mock-backend v0.1.0 starting");

    // Environment is the only configuration source: no CLI flags, no file.
    let config = loader::load_config()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        cors_policy = %config.cors_policy,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
