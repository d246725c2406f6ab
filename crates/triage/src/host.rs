//! The collaborator interface engines call back into.
//!
//! Implementations live at the I/O boundary (the `bot` crate's GitHub
//! adapter, mock hosts in tests). Every operation converts transport failure
//! into `false` or an empty result at that boundary; engines aggregate these
//! best-effort outcomes and never see transport errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use taxonomy::LiveLabel;

use crate::models::{Issue, IssueComment, PullRequest, Release};

/// Which pull requests a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrFilter {
    #[default]
    All,
    Draft,
    Merged,
    /// Merged and not carrying the do-not-list changelog label.
    Changelogable,
}

/// Listing filter for pull requests.
#[derive(Debug, Clone, Default)]
pub struct PrQuery {
    pub filter: PrFilter,
    /// Only PRs merged at or after this instant.
    pub since: Option<DateTime<Utc>>,
    /// Only PRs authored by this login.
    pub author: Option<String>,
}

impl PrQuery {
    #[must_use]
    pub fn changelogable_since(since: Option<DateTime<Utc>>) -> Self {
        Self {
            filter: PrFilter::Changelogable,
            since,
            author: None,
        }
    }
}

/// Which release a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Draft,
    Published,
}

/// Repository operations the engines drive.
///
/// `item` numbers address issues and pull requests interchangeably, the way
/// the platform's issue endpoints do.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// Every label currently on the repository.
    async fn list_labels(&self) -> Vec<LiveLabel>;

    async fn create_label(&self, name: &str, description: &str, color: &str) -> bool;

    async fn update_label(&self, old_name: &str, new_name: &str, description: &str, color: &str) -> bool;

    /// Removes `remove` from the item, then adds `add`. Removal failures must
    /// not prevent the additions; the aggregate outcome is returned.
    async fn replace_labels(&self, item: u64, remove: &[String], add: &[String]) -> bool;

    async fn post_comment(&self, item: u64, body: &str) -> bool;

    async fn list_comments(&self, item: u64) -> Vec<IssueComment>;

    async fn list_pull_requests(&self, query: &PrQuery) -> Vec<PullRequest>;

    /// Fetches a single issue; absence (or fetch failure) is `None`.
    async fn issue(&self, number: u64) -> Option<Issue>;

    /// The most recent release of the given kind, if one exists.
    async fn last_release(&self, kind: ReleaseKind) -> Option<Release>;

    async fn update_release(&self, release: &Release) -> bool;
}
