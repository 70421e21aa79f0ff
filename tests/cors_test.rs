//! End-to-end tests for the two CORS policies.

use reqwest::{Method, StatusCode};

use mock_backend::CorsPolicy;

mod common;

#[tokio::test]
async fn test_static_policy_headers_on_plain_get() {
    let addr = common::spawn_responder(CorsPolicy::Static).await;

    // No Origin header: static policy emits the full set anyway.
    let res = reqwest::get(format!("http://{addr}/api/data")).await.unwrap();
    let headers = res.headers();

    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS, PATCH"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization, X-PAYMENT, X-Custom-Header"
    );
    assert_eq!(
        headers["access-control-expose-headers"],
        "X-Custom-Response-Header, X-Another-Custom-Header"
    );
    assert_eq!(headers["access-control-max-age"], "3600");

    assert_eq!(headers["x-custom-response-header"], "custom-value-123");
    assert_eq!(headers["x-another-custom-header"], "another-value-456");
    assert_eq!(headers["x-backend-version"], "1.0.0");
    assert_eq!(headers["x-backend-test"], "backend-header-value");
}

#[tokio::test]
async fn test_static_policy_request_id_roundtrip() {
    let addr = common::spawn_responder(CorsPolicy::Static).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/"))
        .header("X-Request-ID", "abc123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "abc123");

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.headers()["x-request-id"], "not-provided");
}

#[tokio::test]
async fn test_static_policy_options_is_json_200() {
    let addr = common::spawn_responder(CorsPolicy::Static).await;
    let client = reqwest::Client::new();

    let res = client
        .request(Method::OPTIONS, format!("http://{addr}/api/data"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["method"], "OPTIONS");
}

#[tokio::test]
async fn test_reflective_policy_without_origin_emits_nothing() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .request(Method::OPTIONS, format!("http://{addr}/api/data"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(!res.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_reflective_policy_echoes_origin_exactly() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/api/data"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_reflective_preflight_reflects_requested_method_and_headers() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .request(Method::OPTIONS, format!("http://{addr}/api/protected"))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "x-payment")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()["access-control-allow-methods"], "PUT");
    assert_eq!(res.headers()["access-control-allow-headers"], "x-payment");
    assert_eq!(res.headers()["access-control-max-age"], "86400");
    assert!(res.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reflective_preflight_falls_back_to_defaults() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .request(Method::OPTIONS, format!("http://{addr}/api/protected"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        res.headers()["access-control-allow-headers"],
        "content-type, authorization, x-payment"
    );
}

#[tokio::test]
async fn test_reflective_policy_covers_head_responses() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .head(format!("http://{addr}/api/data"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "http://example.com"
    );
}

#[tokio::test]
async fn test_reflective_policy_has_no_marker_headers() {
    let addr = common::spawn_responder(CorsPolicy::Reflective).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/"))
        .header("Origin", "http://example.com")
        .header("X-Request-ID", "abc123")
        .send()
        .await
        .unwrap();

    // Marker injection belongs to the static policy only.
    assert!(!res.headers().contains_key("x-custom-response-header"));
    assert!(!res.headers().contains_key("x-backend-test"));
    assert!(!res.headers().contains_key("x-request-id"));
}
