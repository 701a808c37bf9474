//! Same-origin forwarder for `/api/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so the session cookie set by the
//! backend stays first-party. Every `/api/*` request is replayed against
//! `API_UPSTREAM_URL` with its method, path, query, headers, and body intact.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures (refused connection, timeout, unreadable body) become a
//! 502 carrying `{"message": ...}`, the same body shape the backend uses for
//! its own errors, so the client renders them through one path.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Upstream service unavailable";

/// Headers scoped to a single connection; never forwarded in either direction.
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        let body = serde_json::json!({ "message": UPSTREAM_UNAVAILABLE_MESSAGE });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// Build the shared upstream client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(upstream: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, upstream: upstream.into() })
    }
}

/// Upstream URL for an incoming request URI.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Copy of `headers` without connection-scoped entries.
pub fn forward_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive"
}

pub async fn forward(
    State(proxy): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&proxy.upstream, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = proxy
        .client
        .request(method, url)
        .headers(forward_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forward_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
