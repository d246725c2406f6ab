//! Per-event orchestration.
//!
//! One `Bot` instance is shared process-wide; the archive it holds is
//! immutable after startup. Each handler runs a label sync first so every
//! label-touching action works against a reconciled repository, then runs
//! the engines the event calls for. Outcomes are AND-aggregated and never
//! short-circuit: a failed step is logged and the remaining steps still run.

use std::sync::Arc;
use taxonomy::LabelArchive;
use tracing::{info, warn};

use crate::autolabel;
use crate::changelog;
use crate::commitcheck;
use crate::host::{ReleaseKind, RepoHost};
use crate::labels;
use crate::lifecycle;
use crate::models::{Issue, PrAction, PullRequest};

/// The event-handling facade the webhook layer drives.
pub struct Bot<H> {
    archive: Arc<LabelArchive>,
    host: H,
    login: String,
}

impl<H: RepoHost> Bot<H> {
    pub fn new(archive: Arc<LabelArchive>, host: H, login: impl Into<String>) -> Self {
        Self {
            archive,
            host,
            login: login.into(),
        }
    }

    /// The underlying host, exposed for diagnostics and tests.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Reconciles the repository's labels against the archive.
    pub async fn sync_labels(&self) -> bool {
        labels::sync_labels(&self.archive, &self.host).await
    }

    /// Handles a pull request lifecycle event.
    pub async fn handle_pr(&self, action: PrAction, pr: &PullRequest) -> bool {
        if !self.sync_labels().await {
            warn!(pr = pr.number, "label sync incomplete before PR handling, proceeding");
        }

        let mut ok = true;

        if matches!(action, PrAction::Edited | PrAction::ReadyForReview) {
            ok &= commitcheck::validate_commit_message(&self.host, &self.login, pr).await;
            ok &= autolabel::label_pull_request(&self.archive, &self.host, pr).await;
        }

        if matches!(
            action,
            PrAction::Opened | PrAction::ReadyForReview | PrAction::ConvertedToDraft
        ) {
            ok &= lifecycle::apply_pr_transition(&self.archive, &self.host, pr, action).await;
        }

        info!(pr = pr.number, ?action, ok, "handled pull request event");
        ok
    }

    /// Handles a newly opened issue: reconcile, then auto-label from the
    /// title's signals.
    pub async fn handle_issue_opened(&self, issue: &Issue) -> bool {
        if !self.sync_labels().await {
            warn!(issue = issue.number, "label sync incomplete before issue handling, proceeding");
        }

        let ok = autolabel::label_issue(&self.archive, &self.host, issue).await;
        info!(issue = issue.number, ok, "handled issue opened event");
        ok
    }

    /// Handles a release event: if a draft release exists, recompose its
    /// changelog. No draft is a no-op success.
    pub async fn handle_release_event(&self) -> bool {
        let Some(draft) = self.host.last_release(ReleaseKind::Draft).await else {
            return true;
        };
        changelog::update_release_changelog(&self.archive, &self.host, &draft).await
    }
}
