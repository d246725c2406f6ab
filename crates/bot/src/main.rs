//! Shepherd webhook server.

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use taxonomy::catalog;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triage::Bot;

use bot::config::Config;
use bot::github::GitHubHost;
use bot::handlers::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let host = GitHubHost::new(&config.github_token, &config.owner, &config.repo);
    info!(repo = %host.repo_slug(), "starting shepherd bot");

    let state = Arc::new(AppState {
        bot: Bot::new(Arc::new(catalog()), host, config.bot_login.clone()),
        webhook_secret: config.webhook_secret.clone(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/webhook", post(handlers::handle_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("failed to bind port {}", config.http_port))?;
    info!(port = config.http_port, "listening for webhook deliveries");
    axum::serve(listener, app).await.context("server terminated")?;

    Ok(())
}
