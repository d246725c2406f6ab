//! The built-in label catalog.
//!
//! Declaration order matters: reconciliation matches live labels and the
//! changelog composer orders its sections in exactly this order.

use crate::archive::LabelArchive;
use crate::label::{AspectKind, Category, ChangelogKind, IssueKind, Label, LabelKind, PrKind, PriorityKind};

/// Builds the catalog every component works against.
///
/// # Panics
///
/// Panics if the catalog itself carries a duplicate kind; that is a
/// programming error in this module, not runtime input.
#[must_use]
pub fn catalog() -> LabelArchive {
    let (archive, defects) = LabelArchive::build(vec![
        (
            Category::Aspect,
            vec![
                Label::new(
                    LabelKind::Aspect(AspectKind::Bug),
                    "🐞",
                    "This issue describes a bug.",
                    "AA5117",
                    &["bug"],
                ),
                Label::new(
                    LabelKind::Aspect(AspectKind::Process),
                    "⚙️",
                    "This issue describes an element of the project's process.",
                    "F0FF01",
                    &["process"],
                ),
                Label::new(
                    LabelKind::Aspect(AspectKind::Feature),
                    "💡",
                    "This issue describes a new feature.",
                    "120BB0",
                    &["feature"],
                ),
                Label::new(
                    LabelKind::Aspect(AspectKind::Enhancement),
                    "📈",
                    "This issue describes an enhancement to an existing feature.",
                    "19504B",
                    &["enhance"],
                ),
                Label::new(
                    LabelKind::Aspect(AspectKind::Documentation),
                    "📚",
                    "This issue describes a change to the existing documentation.",
                    "0075CA",
                    &["doc"],
                ),
            ],
        ),
        (
            Category::Pr,
            vec![
                Label::new(
                    LabelKind::Pr(PrKind::OnGoing),
                    "🏃",
                    "This PR is still in progress.",
                    "2FEFDD",
                    &["progress", "ongoing"],
                ),
                Label::new(
                    LabelKind::Pr(PrKind::ToMerge),
                    "👍",
                    "This PR is ready for merger.",
                    "0E8A16",
                    &["merge"],
                ),
                Label::new(
                    LabelKind::Pr(PrKind::ToReview),
                    "🔬",
                    "This PR is ready for review.",
                    "BA50EB",
                    &["review"],
                ),
                Label::new(
                    LabelKind::Pr(PrKind::OnHold),
                    "🛑",
                    "This PR's progress is halted.",
                    "C5DEF5",
                    &["hold"],
                ),
            ],
        ),
        (
            Category::Priority,
            vec![
                Label::new(
                    LabelKind::Priority(PriorityKind::Urgent),
                    "🔥",
                    "This must be completed immediately.",
                    "3A0002",
                    &["urgent"],
                ),
                Label::new(
                    LabelKind::Priority(PriorityKind::High),
                    "🚨",
                    "This should be worked on ASAP.",
                    "6F0004",
                    &["high"],
                ),
                Label::new(
                    LabelKind::Priority(PriorityKind::Medium),
                    "⏲️",
                    "This should be tackled when possible.",
                    "AD0007",
                    &["medium"],
                ),
                Label::new(
                    LabelKind::Priority(PriorityKind::Low),
                    "📭",
                    "This can be completed after existing backlog of higher priority items.",
                    "FE000A",
                    &["low"],
                ),
            ],
        ),
        (
            Category::Changelog,
            vec![Label::new(
                LabelKind::Changelog(ChangelogKind::DoNotList),
                "👻",
                "This Pull Request will NOT be listed in the Release Changelog",
                "000000",
                &["donotlist"],
            )],
        ),
        (
            Category::Issue,
            vec![
                Label::new(
                    LabelKind::Issue(IssueKind::WontFix),
                    "❌",
                    "This issue describes a suggestion that will not be fixed.",
                    "FFFFFF",
                    &["wontfix"],
                ),
                Label::new(
                    LabelKind::Issue(IssueKind::Duplicate),
                    "👯‍♂️",
                    "This issue duplicates an existing issue.",
                    "FFFFFF",
                    &["duplicate"],
                ),
                Label::new(
                    LabelKind::Issue(IssueKind::GoodFirstIssue),
                    "🥇",
                    "This issue is a good pick for a first-time contributor.",
                    "FFFFFF",
                    // The second alias recognizes the platform's stock label.
                    &["goodfirstissue", "good first issue"],
                ),
            ],
        ),
    ]);

    assert!(defects.is_empty(), "built-in catalog is invalid: {defects:?}");
    archive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_without_defects() {
        let archive = catalog();
        assert_eq!(archive.collections().len(), 5);
    }

    #[test]
    fn catalog_has_no_duplicate_names() {
        let archive = catalog();
        let labels = archive.all_labels();
        for (i, label) in labels.iter().enumerate() {
            for other in &labels[i + 1..] {
                assert_ne!(label.name(), other.name());
            }
        }
    }

    /// Reconciliation is only idempotent if, after a label is created in
    /// canonical form, one of its aliases recognizes it on the next pass.
    #[test]
    fn every_label_recognizes_its_own_canonical_name() {
        let archive = catalog();
        for label in archive.all_labels() {
            let name = label.name().to_lowercase();
            assert!(
                label.aliases().iter().any(|alias| name.contains(alias.as_str())),
                "no alias of {} matches its own name",
                label.name()
            );
        }
    }

    #[test]
    fn every_pr_kind_is_declared() {
        let archive = catalog();
        for kind in [PrKind::ToReview, PrKind::ToMerge, PrKind::OnGoing, PrKind::OnHold] {
            assert!(archive.lookup(LabelKind::Pr(kind)).is_some());
        }
    }
}
