//! Reconciliation of live labels against the archive.
//!
//! A single greedy pass in archive declaration order. Each live label can be
//! consumed by at most one canonical label, and each canonical label matches
//! at most one live label; both sides are tracked with explicit consumed
//! flags rather than by removing elements mid-scan.

use crate::archive::LabelArchive;
use crate::label::Label;
use crate::live::LiveLabel;

/// Outcome of one reconciliation pass. Built fresh each run, never persisted.
#[derive(Debug)]
pub struct Reconciliation<'a> {
    /// Canonical labels with no live counterpart: create instructions.
    pub missing: Vec<&'a Label>,
    /// Live labels recognized by alias but drifted in name, description or
    /// color, paired with their canonical definition: update instructions.
    pub outdated: Vec<(LiveLabel, &'a Label)>,
}

impl Reconciliation<'_> {
    /// True when the live set already mirrors the archive.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.missing.is_empty() && self.outdated.is_empty()
    }
}

/// Diffs the repository's live labels against the archive.
///
/// Matching is case-insensitive substring search of each alias inside the
/// live label name, canonical labels in archive order, aliases in declared
/// order. The first hit settles the canonical label; ties are resolved purely
/// by that deterministic order.
#[must_use]
pub fn diff<'a>(archive: &'a LabelArchive, live: &[LiveLabel]) -> Reconciliation<'a> {
    let lowered: Vec<String> = live.iter().map(|label| label.name.to_lowercase()).collect();
    let mut consumed = vec![false; live.len()];
    let mut missing = Vec::new();
    let mut outdated = Vec::new();

    for label in archive.all_labels() {
        let mut matched = false;

        'aliases: for alias in label.aliases() {
            for (index, name) in lowered.iter().enumerate() {
                if consumed[index] || !name.contains(alias.as_str()) {
                    continue;
                }
                consumed[index] = true;
                matched = true;
                if !label.matches_live(&live[index]) {
                    outdated.push((live[index].clone(), label));
                }
                break 'aliases;
            }
        }

        if !matched {
            missing.push(label);
        }
    }

    Reconciliation { missing, outdated }
}
