//! Kind-unique label collections.

use std::collections::HashSet;
use thiserror::Error;

use crate::label::{Category, Label, LabelKind};

/// Configuration defects detected while constructing the taxonomy.
///
/// A defect never aborts construction: the offending entry is dropped and the
/// first definition wins. The caller decides whether a defect is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyDefect {
    /// Two labels in the same collection declared the same kind.
    #[error("{kind} is defined twice in the {category} collection, dropping \"{dropped}\"")]
    DuplicateKind {
        category: Category,
        kind: LabelKind,
        /// Name of the later definition that was discarded.
        dropped: String,
    },
}

/// A category's validated labels, in declaration order.
#[derive(Debug, Clone)]
pub struct LabelCollection {
    category: Category,
    labels: Vec<Label>,
}

impl LabelCollection {
    /// Validates kind-uniqueness. Later duplicates are dropped and reported;
    /// the collection keeps the first definition of each kind.
    #[must_use]
    pub fn new(category: Category, labels: Vec<Label>) -> (Self, Vec<TaxonomyDefect>) {
        let mut seen: HashSet<LabelKind> = HashSet::new();
        let mut kept = Vec::with_capacity(labels.len());
        let mut defects = Vec::new();

        for label in labels {
            if seen.insert(label.kind()) {
                kept.push(label);
            } else {
                defects.push(TaxonomyDefect::DuplicateKind {
                    category,
                    kind: label.kind(),
                    dropped: label.name().to_string(),
                });
            }
        }

        (
            Self {
                category,
                labels: kept,
            },
            defects,
        )
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Finds the label declared for a kind, if any.
    #[must_use]
    pub fn get(&self, kind: LabelKind) -> Option<&Label> {
        self.labels.iter().find(|label| label.kind() == kind)
    }
}
