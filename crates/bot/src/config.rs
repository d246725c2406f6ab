//! Server configuration from environment variables.

use anyhow::{Context, Result};

/// Runtime configuration for the webhook server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token used for GitHub API calls.
    pub github_token: String,
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Shared secret for webhook signature verification; unset disables
    /// verification (local development only).
    pub webhook_secret: Option<String>,
    /// The bot's own login, used to recognize its previous comments.
    pub bot_login: String,
    /// HTTP listen port.
    pub http_port: u16,
}

impl Config {
    /// Loads configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let repository =
            std::env::var("GITHUB_REPOSITORY").context("GITHUB_REPOSITORY must be set (owner/name)")?;
        let (owner, repo) = repository
            .split_once('/')
            .context("GITHUB_REPOSITORY must look like owner/name")?;

        Ok(Self {
            github_token: std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?,
            owner: owner.to_string(),
            repo: repo.to_string(),
            webhook_secret: std::env::var("WEBHOOK_SECRET").ok().filter(|secret| !secret.is_empty()),
            bot_login: std::env::var("BOT_LOGIN").unwrap_or_else(|_| "shepherd[bot]".to_string()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
        })
    }
}
