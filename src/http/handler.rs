//! Per-method response dispatch.
//!
//! # Responsibilities
//! - Map every inbound request to a response; there is no failure condition
//! - HEAD advertises the GET-equivalent body length without sending a body
//! - TRACE is rejected with 405 (fixed, mirrors common proxy practice)
//! - OPTIONS handling depends on the CORS policy of the instance
//!
//! # Design Decisions
//! - Pure function of (policy, method, path, headers); no shared state, so
//!   concurrent requests need no coordination
//! - Request body is ignored entirely

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Response, StatusCode},
};

use crate::config::CorsPolicy;
use crate::cors;
use crate::http::response::ResponseEnvelope;

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
const TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain");

/// Build the response for one request.
pub fn handle(
    policy: CorsPolicy,
    method: &Method,
    path: &str,
    request_headers: &HeaderMap,
) -> Response<Body> {
    let body = ResponseEnvelope::new(method, path).to_json();

    let mut response = match *method {
        Method::TRACE => method_not_allowed(),
        Method::HEAD => head_response(body.len()),
        Method::OPTIONS if policy == CorsPolicy::Reflective => preflight_response(),
        // Static policy has no dedicated OPTIONS handling: 200 with JSON body,
        // same as any other method.
        _ => json_response(body),
    };

    cors::apply_policy(policy, method, request_headers, response.headers_mut());
    response
}

/// 200 with the envelope JSON body.
fn json_response(body: Vec<u8>) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, APPLICATION_JSON);
    response
}

/// 200 with no body; Content-Length reflects the GET-equivalent body size.
fn head_response(body_len: usize) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, APPLICATION_JSON);
    response
        .headers_mut()
        .insert(header::CONTENT_LENGTH, HeaderValue::from(body_len));
    response
}

/// 204 with an empty body for reflective-policy preflights.
fn preflight_response() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}

/// 405 for TRACE.
fn method_not_allowed() -> Response<Body> {
    let mut response = Response::new(Body::from("Method Not Allowed"));
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, TEXT_PLAIN);
    response
}
