//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the `/api/*` forwarder, the Leptos
//! SSR pages (`/`, `/auth`, `/profiles`), and the compiled WASM/CSS bundle
//! under `/pkg`. Anything else falls through to static files in the site
//! root, which is where assets like `/default-avatar.png` live.

pub mod proxy;


use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use proxy::ProxyState;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Health check plus the API forwarder.
pub fn api_routes(proxy: ProxyState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .with_state(proxy)
}

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]`) or the upstream client cannot be
/// built.
pub fn app(config: &ServerConfig) -> Result<Router, AppError> {
    let conf = get_configuration(None).map_err(|e| AppError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let proxy = ProxyState::new(
        config.api_upstream_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    Ok(api_routes(proxy)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
