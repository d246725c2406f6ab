//! Webhook server for the Shepherd repository bot.
//!
//! This crate is the I/O shell around the `taxonomy` and `triage` cores:
//! - Environment-driven configuration
//! - Webhook signature verification
//! - A reqwest adapter implementing `triage::RepoHost` against the GitHub
//!   REST API
//! - An axum route that turns webhook deliveries into orchestrator calls
//!
//! Transport failures never cross into the cores; they are logged here and
//! degrade to `false`/empty results.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod github;
pub mod handlers;
pub mod webhooks;

pub use config::Config;
pub use github::GitHubHost;
pub use webhooks::verify_webhook_signature;
