//! Mock backend fixture for proxy integration testing.
//!
//! Echoes request metadata (path, method) as JSON and attaches a deterministic
//! set of CORS and marker headers, so an external suite can assert that a proxy
//! under test passes headers through unmodified in both directions.

pub mod config;
pub mod cors;
pub mod http;

pub use config::schema::{CorsPolicy, ResponderConfig};
pub use http::HttpServer;
