use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::any;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

// =============================================================
// Helpers
// =============================================================

/// Upstream stand-in that echoes what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let received = serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "host": headers.get(header::HOST).and_then(|v| v.to_str().ok()),
        "cookie": headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    (
        StatusCode::CREATED,
        [(header::SET_COOKIE, "sid=abc; HttpOnly; Path=/")],
        Json(received),
    )
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/{*path}", any(echo));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/profiles?community=Artist".parse().unwrap();
    assert_eq!(upstream_url("http://backend:5000", &uri), "http://backend:5000/api/profiles?community=Artist");
}

#[test]
fn forward_headers_drops_connection_scoped_entries() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forward_headers(&headers);

    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::COOKIE).unwrap(), "sid=abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn forward_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = forward_headers(&headers);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

// =============================================================
// Forwarding
// =============================================================

#[tokio::test]
async fn forward_replays_request_upstream() {
    let upstream = spawn_upstream().await;
    let proxy = ProxyState::new(upstream, Duration::from_secs(5)).unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login?next=%2Fprofiles")
        .header(header::HOST, "creatorhub.local")
        .header(header::COOKIE, "sid=old")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"a@x.com","password":"pw"}"#))
        .unwrap();
    let response = api_routes(proxy).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::SET_COOKIE).unwrap(), "sid=abc; HttpOnly; Path=/");

    let received = body_json(response).await;
    assert_eq!(received["method"], "POST");
    assert_eq!(received["uri"], "/api/auth/login?next=%2Fprofiles");
    assert_eq!(received["cookie"], "sid=old");
    assert_eq!(received["body"], r#"{"email":"a@x.com","password":"pw"}"#);
    assert_ne!(received["host"], "creatorhub.local");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_with_message() {
    let proxy = ProxyState::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

    let response = api_routes(proxy)
        .oneshot(Request::builder().uri("/api/profiles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["message"], UPSTREAM_UNAVAILABLE_MESSAGE);
}
