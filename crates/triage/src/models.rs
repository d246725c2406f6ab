//! Platform object projections.
//!
//! Snapshots of pull requests, issues, releases and comments, constructed per
//! webhook event and discarded when its handlers complete. Fields mirror the
//! platform's REST payloads; anything the engines do not read is left out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taxonomy::{Category, LiveLabel};

/// The platform user attached to an event or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
    #[serde(default)]
    pub id: u64,
}

/// Pull request snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<LiveLabel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub user: Option<Actor>,
}

impl PullRequest {
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// The first line of the body, where auto-labeling signals live.
    #[must_use]
    pub fn first_body_line(&self) -> &str {
        self.body.as_deref().unwrap_or("").lines().next().unwrap_or("")
    }

    /// The applied label belonging to a category, if any.
    #[must_use]
    pub fn label_in(&self, category: Category) -> Option<&LiveLabel> {
        let namespace = category.namespace();
        self.labels.iter().find(|label| label.name.contains(&namespace))
    }

    /// Whether the PR carries the given label name.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}

/// Issue snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<LiveLabel>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub user: Option<Actor>,
}

impl Issue {
    /// The applied label belonging to a category, if any.
    #[must_use]
    pub fn label_in(&self, category: Category) -> Option<&LiveLabel> {
        let namespace = category.namespace();
        self.labels.iter().find(|label| label.name.contains(&namespace))
    }
}

/// Release snapshot. Only draft releases are ever rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub body: String,
}

/// A comment on an issue or pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<Actor>,
}

/// Lifecycle action reported for a pull request event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrAction {
    Opened,
    Edited,
    ReadyForReview,
    ConvertedToDraft,
    Closed,
}

impl PrAction {
    /// Maps the webhook `action` string; unknown actions yield `None` and
    /// are ignored by the caller.
    #[must_use]
    pub fn from_webhook(action: &str) -> Option<Self> {
        match action {
            "opened" => Some(Self::Opened),
            "edited" => Some(Self::Edited),
            "ready_for_review" => Some(Self::ReadyForReview),
            "converted_to_draft" => Some(Self::ConvertedToDraft),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}
