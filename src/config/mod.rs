//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, CORS_POLICY)
//!     → loader.rs (parse & validate)
//!     → ResponderConfig (validated, immutable)
//!     → handed to the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Environment is read exactly once at process start; no reload
//! - All fields have defaults so a bare environment works out of the box
//! - No CLI flags and no config file: the fixture's only external inputs are
//!   the environment and the inbound request itself

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::CorsPolicy;
pub use schema::ListenerConfig;
pub use schema::ResponderConfig;
pub use schema::TimeoutConfig;
