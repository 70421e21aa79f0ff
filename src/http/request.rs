//! Request handling.
//!
//! # Responsibilities
//! - Derive a correlation id for log lines
//!
//! # Design Decisions
//! - Inbound `X-Request-ID` wins when present so fixture logs line up with the
//!   proxy's logs; otherwise a UUID v4 is generated
//! - Log-only: the echoed `X-Request-ID` response header is handled by the
//!   CORS/marker layer and still defaults to `not-provided`

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::cors::X_REQUEST_ID;

/// Correlation id used in log lines for this request.
pub fn log_request_id(headers: &HeaderMap) -> String {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_inbound_id_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_REQUEST_ID, HeaderValue::from_static("abc123"));
        assert_eq!(log_request_id(&headers), "abc123");
    }

    #[test]
    fn test_generated_when_absent() {
        let id = log_request_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
