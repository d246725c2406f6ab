//! Pull request lifecycle transitions.
//!
//! PR state lives in which `pr.` label is attached; there is at most one at a
//! time. A transition removes every status label and applies the one the
//! action calls for.

use taxonomy::{Category, LabelArchive, LabelKind, PrKind};

use crate::host::RepoHost;
use crate::labels;
use crate::models::{PrAction, PullRequest};

/// The status label an action leads to. `None` means the action does not
/// touch status labels (edits trigger re-validation only).
#[must_use]
pub fn transition(action: PrAction, draft: bool) -> Option<PrKind> {
    match action {
        PrAction::ReadyForReview => Some(PrKind::ToReview),
        PrAction::ConvertedToDraft => Some(PrKind::OnGoing),
        PrAction::Opened => Some(if draft { PrKind::OnGoing } else { PrKind::ToReview }),
        PrAction::Edited | PrAction::Closed => None,
    }
}

/// Applies the transition for an action: removes all applied `pr.` labels and
/// adds the target status label. No-op success when the action has no
/// transition.
pub async fn apply_pr_transition<H: RepoHost + ?Sized>(
    archive: &LabelArchive,
    host: &H,
    pr: &PullRequest,
    action: PrAction,
) -> bool {
    let Some(kind) = transition(action, pr.draft) else {
        return true;
    };

    let remove = labels::names_in_category(Category::Pr, &pr.labels);
    let add: Vec<String> = archive
        .lookup(LabelKind::Pr(kind))
        .map(|label| label.name().to_string())
        .into_iter()
        .collect();

    host.replace_labels(pr.number, &remove, &add).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_for_review_moves_to_review() {
        assert_eq!(transition(PrAction::ReadyForReview, false), Some(PrKind::ToReview));
        assert_eq!(transition(PrAction::ReadyForReview, true), Some(PrKind::ToReview));
    }

    #[test]
    fn opened_branches_on_draft_flag() {
        assert_eq!(transition(PrAction::Opened, false), Some(PrKind::ToReview));
        assert_eq!(transition(PrAction::Opened, true), Some(PrKind::OnGoing));
    }

    #[test]
    fn converted_to_draft_moves_to_ongoing() {
        assert_eq!(transition(PrAction::ConvertedToDraft, false), Some(PrKind::OnGoing));
    }

    #[test]
    fn edited_is_not_a_transition() {
        assert_eq!(transition(PrAction::Edited, false), None);
        assert_eq!(transition(PrAction::Closed, false), None);
    }
}
