//! CORS and marker header emission.
//!
//! # Responsibilities
//! - Attach the static wildcard CORS set plus passthrough marker headers
//! - Reflect the caller's `Origin` and preflight request headers back
//! - Echo `X-Request-ID` for bidirectional passthrough assertions
//!
//! # Design Decisions
//! - Header values are literal constants; external test suites assert on them
//! - The two policies never mix: one instance emits exactly one set
//! - Policy headers are applied uniformly to every response of an instance,
//!   HEAD and TRACE included

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method};

use crate::config::CorsPolicy;

/// Inbound/outbound request correlation header.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

const X_CUSTOM_RESPONSE_HEADER: HeaderName = HeaderName::from_static("x-custom-response-header");
const X_ANOTHER_CUSTOM_HEADER: HeaderName = HeaderName::from_static("x-another-custom-header");
const X_BACKEND_VERSION: HeaderName = HeaderName::from_static("x-backend-version");
const X_BACKEND_TEST: HeaderName = HeaderName::from_static("x-backend-test");

/// Fallback for preflights that omit `Access-Control-Request-Method`.
const REFLECTIVE_DEFAULT_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Fallback for preflights that omit `Access-Control-Request-Headers`.
const REFLECTIVE_DEFAULT_HEADERS: &str = "content-type, authorization, x-payment";

/// Value echoed in `X-Request-ID` when the request did not carry one.
pub const REQUEST_ID_NOT_PROVIDED: &str = "not-provided";

/// Attach policy headers for this response.
///
/// `request_headers` is the inbound header map; `response_headers` is mutated
/// in place. Pure with respect to everything else.
pub fn apply_policy(
    policy: CorsPolicy,
    method: &Method,
    request_headers: &HeaderMap,
    response_headers: &mut HeaderMap,
) {
    match policy {
        CorsPolicy::Static => apply_static(request_headers, response_headers),
        CorsPolicy::Reflective => apply_reflective(method, request_headers, response_headers),
    }
}

/// Static policy: fixed wildcard CORS set plus marker headers, unconditionally.
fn apply_static(request_headers: &HeaderMap, response_headers: &mut HeaderMap) {
    response_headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response_headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS, PATCH"),
    );
    response_headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, X-PAYMENT, X-Custom-Header"),
    );
    response_headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("X-Custom-Response-Header, X-Another-Custom-Header"),
    );
    response_headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("3600"),
    );

    // Marker headers asserted by header-passthrough tests on the proxy side.
    response_headers.insert(
        X_CUSTOM_RESPONSE_HEADER,
        HeaderValue::from_static("custom-value-123"),
    );
    response_headers.insert(
        X_ANOTHER_CUSTOM_HEADER,
        HeaderValue::from_static("another-value-456"),
    );
    response_headers.insert(X_BACKEND_VERSION, HeaderValue::from_static("1.0.0"));
    response_headers.insert(
        X_BACKEND_TEST,
        HeaderValue::from_static("backend-header-value"),
    );

    let request_id = request_headers
        .get(&X_REQUEST_ID)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(REQUEST_ID_NOT_PROVIDED));
    response_headers.insert(X_REQUEST_ID, request_id);
}

/// Reflective policy: CORS headers only when `Origin` is present, echoed
/// verbatim. Preflights additionally reflect the requested method/headers.
fn apply_reflective(
    method: &Method,
    request_headers: &HeaderMap,
    response_headers: &mut HeaderMap,
) {
    let Some(origin) = request_headers.get(header::ORIGIN) else {
        return;
    };

    response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    response_headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    if *method == Method::OPTIONS {
        let allow_methods = request_headers
            .get(header::ACCESS_CONTROL_REQUEST_METHOD)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(REFLECTIVE_DEFAULT_METHODS));
        let allow_headers = request_headers
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(REFLECTIVE_DEFAULT_HEADERS));

        response_headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, allow_methods);
        response_headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        // Preflight cache: 24 hours.
        response_headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("86400"),
        );
    }
}
