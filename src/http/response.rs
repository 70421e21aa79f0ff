//! Response envelope construction.
//!
//! # Responsibilities
//! - Build the fixed-shape JSON body echoing request metadata
//! - Normalize the echoed path to always start with `/`
//!
//! # Design Decisions
//! - Field order in the struct matches the wire format asserted by external
//!   suites: `status`, `message`, `path`, `method`
//! - One envelope per request, discarded after the response is flushed

use axum::http::Method;
use serde::{Deserialize, Serialize};

/// Constant `status` field value.
pub const STATUS_OK: &str = "ok";

/// Constant `message` field value.
pub const BACKEND_MESSAGE: &str = "Backend response";

/// JSON body describing the received request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: String,
    pub message: String,
    pub path: String,
    pub method: String,
}

impl ResponseEnvelope {
    /// Build the envelope for a request, normalizing the path.
    pub fn new(method: &Method, path: &str) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            message: BACKEND_MESSAGE.to_string(),
            path: normalize_path(path),
            method: method.as_str().to_string(),
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Vec<u8> {
        // Plain string fields only; serialization cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Normalize a request path so it always starts with `/`.
/// An empty path means root.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
