//! Shared utilities for end-to-end tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use mock_backend::{CorsPolicy, HttpServer, ResponderConfig};

/// Spawn a responder with the given policy on an ephemeral port.
///
/// The listener is bound before the server task is spawned, so the returned
/// address accepts connections immediately.
pub async fn spawn_responder(policy: CorsPolicy) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ResponderConfig {
        cors_policy: policy,
        ..ResponderConfig::default()
    };
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
