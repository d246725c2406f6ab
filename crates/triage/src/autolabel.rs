//! Automatic labeling from intent signals in titles and bodies.
//!
//! Issues: the title may carry an aspect prefix (`bug:`) and/or a priority
//! bracket code (`[u]` for Urgent). PRs: only the first line of the body is
//! inspected, `Type: <name>` taking precedence over `Fixes #<n>`.

use regex::Regex;
use std::sync::OnceLock;
use taxonomy::{Category, Label, LabelArchive, LiveLabel};
use tracing::debug;

use crate::host::RepoHost;
use crate::labels;
use crate::models::{Issue, PullRequest};

/// What the signals in a PR body resolved to.
///
/// Distinguishes "no signal at all" from "a signal that resolves to nothing";
/// the former leaves the applied labels untouched, the latter clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelIntent<'a> {
    /// No signal present; existing labels stay as they are.
    Unspecified,
    /// A signal resolved to this canonical label.
    Resolved(&'a Label),
    /// A signal was present but resolved to nothing (unknown type name,
    /// missing issue, issue without an aspect label).
    Unresolved,
}

fn manual_type_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*type\s*:\s*([A-Za-z]+)").unwrap())
}

fn linked_issue_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)fixes\s+#(\d+)").unwrap())
}

/// The `Type: <name>` declaration opening a line, if present. Anchored so a
/// word that merely ends in "type" is never read as a signal.
#[must_use]
pub fn parse_manual_type(line: &str) -> Option<String> {
    manual_type_re()
        .captures(line)
        .map(|captures| captures[1].to_string())
}

/// The `Fixes #<n>` reference on a line, if present.
#[must_use]
pub fn parse_linked_issue(line: &str) -> Option<u64> {
    linked_issue_re()
        .captures(line)
        .and_then(|captures| captures[1].parse().ok())
}

/// Resolves a manual type name against the aspect collection's kind names,
/// case-insensitively.
#[must_use]
pub fn resolve_aspect_name<'a>(archive: &'a LabelArchive, name: &str) -> Option<&'a Label> {
    archive
        .collection(Category::Aspect)?
        .labels()
        .iter()
        .find(|label| label.kind().as_str().eq_ignore_ascii_case(name))
}

/// Maps a live aspect label on a linked issue back to its canonical
/// definition by exact name.
fn resolve_issue_aspect<'a>(archive: &'a LabelArchive, applied: Option<&LiveLabel>) -> Option<&'a Label> {
    let applied = applied?;
    archive
        .all_labels()
        .into_iter()
        .find(|label| label.name() == applied.name)
}

/// Computes and applies the aspect label a PR's first body line asks for.
///
/// `Type: <name>` wins over `Fixes #<n>`; the linked-issue path copies the
/// referenced issue's aspect label. Idempotent: when the resolved label is
/// already the only applied aspect label, nothing is touched.
pub async fn label_pull_request<H: RepoHost + ?Sized>(
    archive: &LabelArchive,
    host: &H,
    pr: &PullRequest,
) -> bool {
    let line = pr.first_body_line();

    let intent = if let Some(name) = parse_manual_type(line) {
        match resolve_aspect_name(archive, &name) {
            Some(label) => LabelIntent::Resolved(label),
            None => LabelIntent::Unresolved,
        }
    } else if let Some(number) = parse_linked_issue(line) {
        match host.issue(number).await {
            Some(issue) => match resolve_issue_aspect(archive, issue.label_in(Category::Aspect)) {
                Some(label) => LabelIntent::Resolved(label),
                None => LabelIntent::Unresolved,
            },
            None => LabelIntent::Unresolved,
        }
    } else {
        LabelIntent::Unspecified
    };

    let applied = labels::names_in_category(Category::Aspect, &pr.labels);

    match intent {
        LabelIntent::Unspecified => true,
        LabelIntent::Resolved(label) if applied == [label.name()] => {
            debug!(pr = pr.number, label = %label.name(), "aspect label already applied");
            true
        }
        LabelIntent::Resolved(label) => {
            host.replace_labels(pr.number, &applied, &[label.name().to_string()])
                .await
        }
        LabelIntent::Unresolved if applied.is_empty() => true,
        LabelIntent::Unresolved => host.replace_labels(pr.number, &applied, &[]).await,
    }
}

/// Scans an issue title for an aspect prefix and a priority bracket code and
/// applies the resulting label delta.
///
/// No signal at all is a no-op success. Labels already in place are kept out
/// of the add set; stale labels of a signaled category are removed.
pub async fn label_issue<H: RepoHost + ?Sized>(archive: &LabelArchive, host: &H, issue: &Issue) -> bool {
    let title = issue.title.to_lowercase();

    let aspect = archive.collection(Category::Aspect).and_then(|collection| {
        collection
            .labels()
            .iter()
            .find(|label| title.contains(&format!("{}:", label.kind().as_str().to_lowercase())))
    });

    let priority = archive.collection(Category::Priority).and_then(|collection| {
        collection.labels().iter().find(|label| {
            let code = label.kind().as_str().to_lowercase();
            code.chars()
                .next()
                .is_some_and(|initial| title.contains(&format!("[{initial}]")))
        })
    });

    if aspect.is_none() && priority.is_none() {
        return true;
    }

    let mut add: Vec<String> = Vec::new();
    let mut applied: Vec<String> = Vec::new();
    if let Some(label) = aspect {
        add.push(label.name().to_string());
        applied.extend(labels::names_in_category(Category::Aspect, &issue.labels));
    }
    if let Some(label) = priority {
        add.push(label.name().to_string());
        applied.extend(labels::names_in_category(Category::Priority, &issue.labels));
    }

    let mut remove: Vec<String> = Vec::new();
    for existing in applied {
        if let Some(position) = add.iter().position(|name| *name == existing) {
            // Already in place: neither removed nor re-added.
            add.remove(position);
        } else {
            remove.push(existing);
        }
    }

    if add.is_empty() && remove.is_empty() {
        return true;
    }

    host.replace_labels(issue.number, &remove, &add).await
}
