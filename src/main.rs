#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match routes::app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upstream = %config.api_upstream_url, "creatorhub listening");
    axum::serve(listener, app).await.expect("server failed");
}
