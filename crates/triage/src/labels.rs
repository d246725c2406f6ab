//! Drives reconciliation instructions against a repository host.

use taxonomy::{reconcile, Category, LabelArchive, LiveLabel};
use tracing::warn;

use crate::host::RepoHost;

/// Runs one reconciliation pass: diffs live labels against the archive, then
/// issues an update per outdated pair and a create per missing label.
///
/// Operations are independent and best-effort; one failure never blocks the
/// rest. Returns the logical AND of every outcome, so a `false` means the
/// repository is partially reconciled and will self-heal on the next pass.
pub async fn sync_labels<H: RepoHost + ?Sized>(archive: &LabelArchive, host: &H) -> bool {
    let live = host.list_labels().await;
    let result = reconcile::diff(archive, &live);
    let mut ok = true;

    for (stale, canonical) in &result.outdated {
        let updated = host
            .update_label(&stale.name, canonical.name(), canonical.description(), canonical.color())
            .await;
        if !updated {
            warn!(from = %stale.name, to = %canonical.name(), "failed to update outdated label");
        }
        ok &= updated;
    }

    for canonical in &result.missing {
        let created = host
            .create_label(canonical.name(), canonical.description(), canonical.color())
            .await;
        if !created {
            warn!(label = %canonical.name(), "failed to create missing label");
        }
        ok &= created;
    }

    ok
}

/// Names of the applied labels that belong to a category's namespace.
#[must_use]
pub fn names_in_category(category: Category, labels: &[LiveLabel]) -> Vec<String> {
    let namespace = category.namespace();
    labels
        .iter()
        .filter(|label| label.name.contains(&namespace))
        .map(|label| label.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_in_category_matches_namespace_only() {
        let labels = vec![
            LiveLabel::named("🔬 pr.ToReview"),
            LiveLabel::named("🐞 aspect.Bug"),
            LiveLabel::named("unmanaged"),
        ];
        assert_eq!(names_in_category(Category::Pr, &labels), ["🔬 pr.ToReview"]);
        assert_eq!(names_in_category(Category::Aspect, &labels), ["🐞 aspect.Bug"]);
        assert!(names_in_category(Category::Priority, &labels).is_empty());
    }
}
