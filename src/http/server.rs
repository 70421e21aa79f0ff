//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a catch-all handler for every method and path
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and serve with graceful shutdown

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::IntoResponse,
    routing::any,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{CorsPolicy, ResponderConfig};
use crate::http::handler;
use crate::http::request::log_request_id;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub cors_policy: CorsPolicy,
}

/// HTTP server for the mock responder.
pub struct HttpServer {
    router: Router,
    config: ResponderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ResponderConfig) -> Self {
        let state = AppState {
            cors_policy: config.cors_policy,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ResponderConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(respond))
            .route("/", any(respond))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            cors_policy = %self.config.cors_policy,
            "Mock backend listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Mock backend stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }
}

/// Catch-all handler: answers every request without consulting any store.
async fn respond(State(state): State<AppState>, request: Request<Body>) -> impl IntoResponse {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = log_request_id(request.headers());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Answering request"
    );

    handler::handle(state.cors_policy, &method, &path, request.headers())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
