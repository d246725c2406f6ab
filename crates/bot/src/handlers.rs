//! Webhook route: verify, parse, dispatch.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};
use triage::{Bot, Issue, PrAction, PullRequest};

use crate::github::GitHubHost;
use crate::webhooks::verify_webhook_signature;

/// State shared by the webhook route.
pub struct AppState {
    pub bot: Bot<GitHubHost>,
    pub webhook_secret: Option<String>,
}

/// Pull request event payload (only the fields the engines read).
#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    action: String,
    pull_request: PullRequest,
}

/// Issue event payload.
#[derive(Debug, Deserialize)]
struct IssueEvent {
    action: String,
    issue: Issue,
}

fn ignored(reason: &str) -> Json<Value> {
    Json(json!({ "status": "ignored", "reason": reason }))
}

fn handled(event: &str, ok: bool) -> Json<Value> {
    Json(json!({ "status": if ok { "ok" } else { "partial" }, "event": event }))
}

/// Handles a webhook delivery.
pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    if let Some(secret) = &state.webhook_secret {
        let signature = headers
            .get("X-Hub-Signature-256")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if !verify_webhook_signature(secret, &body, signature) {
            warn!("webhook signature verification failed");
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");
    let delivery_id = headers
        .get("X-GitHub-Delivery")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info!(event_type, delivery_id, "received webhook delivery");

    match event_type {
        "pull_request" => {
            let payload: PullRequestEvent = parse(&body)?;
            let Some(action) = PrAction::from_webhook(&payload.action) else {
                debug!(action = %payload.action, "ignoring unmapped pull request action");
                return Ok(ignored("unmapped_action"));
            };
            let ok = state.bot.handle_pr(action, &payload.pull_request).await;
            Ok(handled("pull_request", ok))
        }
        "issues" => {
            let payload: IssueEvent = parse(&body)?;
            if payload.action != "opened" {
                return Ok(ignored("unmapped_action"));
            }
            let ok = state.bot.handle_issue_opened(&payload.issue).await;
            Ok(handled("issues", ok))
        }
        "label" => {
            // A human touched the label set; reconcile it back.
            let ok = state.bot.sync_labels().await;
            Ok(handled("label", ok))
        }
        "release" => {
            let ok = state.bot.handle_release_event().await;
            Ok(handled("release", ok))
        }
        _ => {
            debug!(event_type, "ignoring event type");
            Ok(ignored("unhandled_event"))
        }
    }
}

/// Liveness endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn parse<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, StatusCode> {
    serde_json::from_slice(body).map_err(|error| {
        warn!(error = %error, "failed to parse webhook payload");
        StatusCode::BAD_REQUEST
    })
}
