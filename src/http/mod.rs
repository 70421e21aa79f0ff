//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (correlation id for logs)
//!     → handler.rs (per-method dispatch, pure over method/path/headers)
//!     → response.rs (envelope construction)
//!     → cors (policy headers)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use response::ResponseEnvelope;
pub use server::HttpServer;
