//! The process-wide label archive.

use tracing::warn;

use crate::collection::{LabelCollection, TaxonomyDefect};
use crate::label::{Category, Label, LabelKind};
use crate::live::LiveLabel;

/// Ordered list of label collections, constructed once at startup and never
/// mutated. Collection order is load-bearing: it is the match precedence used
/// by reconciliation and the section order of composed changelogs.
#[derive(Debug, Clone)]
pub struct LabelArchive {
    collections: Vec<LabelCollection>,
}

impl LabelArchive {
    #[must_use]
    pub fn new(collections: Vec<LabelCollection>) -> Self {
        Self { collections }
    }

    /// Validates and assembles collections, aggregating every defect so the
    /// caller can decide how to treat them.
    #[must_use]
    pub fn build(sets: Vec<(Category, Vec<Label>)>) -> (Self, Vec<TaxonomyDefect>) {
        let mut collections = Vec::with_capacity(sets.len());
        let mut defects = Vec::new();
        for (category, labels) in sets {
            let (collection, mut collection_defects) = LabelCollection::new(category, labels);
            collections.push(collection);
            defects.append(&mut collection_defects);
        }
        (Self::new(collections), defects)
    }

    #[must_use]
    pub fn collections(&self) -> &[LabelCollection] {
        &self.collections
    }

    /// The collection for a category, if the archive declares one.
    #[must_use]
    pub fn collection(&self, category: Category) -> Option<&LabelCollection> {
        self.collections
            .iter()
            .find(|collection| collection.category() == category)
    }

    /// Looks up the label declared for a kind. Absence is an explicit `None`,
    /// never a panic; a miss is logged because it usually means a handler is
    /// referencing a kind the catalog no longer declares.
    #[must_use]
    pub fn lookup(&self, kind: LabelKind) -> Option<&Label> {
        let found = self.collection(kind.category()).and_then(|collection| collection.get(kind));
        if found.is_none() {
            warn!(%kind, "label kind is not declared in the archive");
        }
        found
    }

    /// Every label, flattened in declaration order, no duplicates.
    #[must_use]
    pub fn all_labels(&self) -> Vec<&Label> {
        self.collections
            .iter()
            .flat_map(|collection| collection.labels().iter())
            .collect()
    }

    /// Maps a live label back to its canonical definition by exact
    /// name/description/color equality.
    #[must_use]
    pub fn find_live(&self, live: &LiveLabel) -> Option<&Label> {
        self.all_labels().into_iter().find(|label| label.matches_live(live))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{AspectKind, PrKind};

    fn archive() -> LabelArchive {
        let (archive, defects) = LabelArchive::build(vec![
            (
                Category::Aspect,
                vec![Label::new(LabelKind::Aspect(AspectKind::Bug), "🐞", "a bug", "AA5117", &["bug"])],
            ),
            (
                Category::Pr,
                vec![
                    Label::new(LabelKind::Pr(PrKind::OnGoing), "🏃", "wip", "2FEFDD", &["progress", "ongoing"]),
                    Label::new(LabelKind::Pr(PrKind::ToReview), "🔬", "ready", "BA50EB", &["review"]),
                ],
            ),
        ]);
        assert!(defects.is_empty());
        archive
    }

    #[test]
    fn lookup_finds_declared_kind() {
        let archive = archive();
        let label = archive.lookup(LabelKind::Pr(PrKind::ToReview)).unwrap();
        assert_eq!(label.name(), "🔬 pr.ToReview");
    }

    #[test]
    fn lookup_miss_is_none() {
        assert!(archive().lookup(LabelKind::Pr(PrKind::ToMerge)).is_none());
    }

    #[test]
    fn all_labels_flattens_in_declaration_order() {
        let archive = archive();
        let names: Vec<&str> = archive.all_labels().iter().map(|label| label.name()).collect();
        assert_eq!(names, ["🐞 aspect.Bug", "🏃 pr.OnGoing", "🔬 pr.ToReview"]);
    }

    #[test]
    fn find_live_requires_exact_equality() {
        let archive = archive();
        let exact = LiveLabel {
            name: "🐞 aspect.Bug".to_string(),
            description: "a bug".to_string(),
            color: "AA5117".to_string(),
        };
        let edited = LiveLabel {
            description: "A bug.".to_string(),
            ..exact.clone()
        };

        assert!(archive.find_live(&exact).is_some());
        assert!(archive.find_live(&edited).is_none());
    }
}
