//! Release changelog composition.
//!
//! Merged PRs are grouped by their aspect label into sections, in taxonomy
//! declaration order, with PRs carrying no aspect label collected under
//! "Others" at the end. The composed block is spliced into the release body
//! at a sentinel heading; recomposing with an unchanged PR set reproduces the
//! body byte for byte.

use std::fmt::Write;
use taxonomy::{Category, Label, LabelArchive};
use tracing::info;

use crate::host::{PrQuery, ReleaseKind, RepoHost};
use crate::models::{PullRequest, Release};

/// Sentinel heading that delimits the changelog inside a release body.
pub const CHANGELOG_HEADING: &str = "## Changelog";

const OTHERS_HEADER: &str = "### 🧱 Others";

/// Section header derived from a label name: `"🐞 aspect.Bug"` becomes
/// `"### 🐞 Bugs"`.
fn section_header(label: &Label) -> String {
    let emoji = label.name().split_whitespace().next().unwrap_or("");
    format!("### {emoji} {}s", label.kind().as_str())
}

fn entry(pr: &PullRequest) -> String {
    format!("- {} (#{})", pr.title, pr.number)
}

/// Composes the changelog block for a set of merged PRs.
///
/// The returned block starts with the sentinel heading and carries no
/// trailing whitespace, which is what makes merging idempotent.
#[must_use]
pub fn compose(archive: &LabelArchive, prs: &[PullRequest]) -> String {
    let mut block = CHANGELOG_HEADING.to_string();

    let aspect_labels = archive
        .collection(Category::Aspect)
        .map(|collection| collection.labels())
        .unwrap_or_default();

    for label in aspect_labels {
        let entries: Vec<String> = prs
            .iter()
            .filter(|pr| pr.has_label(label.name()))
            .map(entry)
            .collect();
        if entries.is_empty() {
            continue;
        }
        let _ = write!(block, "\n{}\n{}", section_header(label), entries.join("\n"));
    }

    let others: Vec<String> = prs
        .iter()
        .filter(|pr| pr.label_in(Category::Aspect).is_none())
        .map(entry)
        .collect();
    if !others.is_empty() {
        let _ = write!(block, "\n{OTHERS_HEADER}\n{}", others.join("\n"));
    }

    block
}

/// Splices a composed changelog into a release body.
///
/// An existing changelog (sentinel heading through end of body) is replaced;
/// otherwise the block is appended after the trimmed body.
#[must_use]
pub fn merge_into_body(body: &str, changelog: &str) -> String {
    match body.find(CHANGELOG_HEADING) {
        Some(index) => format!("{}{changelog}", &body[..index]),
        None if body.trim_end().is_empty() => changelog.to_string(),
        None => format!("{}\n\n{changelog}", body.trim_end()),
    }
}

/// Rewrites a draft release's changelog from the PRs merged since the last
/// published release. Published releases are never touched.
pub async fn update_release_changelog<H: RepoHost + ?Sized>(
    archive: &LabelArchive,
    host: &H,
    release: &Release,
) -> bool {
    if !release.draft {
        return true;
    }

    let since = host
        .last_release(ReleaseKind::Published)
        .await
        .and_then(|published| published.published_at);
    let merged = host
        .list_pull_requests(&PrQuery::changelogable_since(since))
        .await;

    info!(
        release = %release.tag_name,
        pr_count = merged.len(),
        "composing draft release changelog"
    );

    let mut updated = release.clone();
    updated.body = merge_into_body(&release.body, &compose(archive, &merged));
    host.update_release(&updated).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taxonomy::{catalog, LiveLabel};

    fn merged_pr(number: u64, title: &str, label: Option<&str>) -> PullRequest {
        PullRequest {
            number,
            state: "closed".to_string(),
            title: title.to_string(),
            body: None,
            labels: label.map(LiveLabel::named).into_iter().collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            closed_at: Some(Utc::now()),
            merged_at: Some(Utc::now()),
            draft: false,
            user: None,
        }
    }

    #[test]
    fn sections_follow_taxonomy_order_with_others_last() {
        let archive = catalog();
        let prs = vec![
            merged_pr(3, "Untagged cleanup", None),
            merged_pr(1, "Fix crash", Some("🐞 aspect.Bug")),
            merged_pr(2, "Add export", Some("💡 aspect.Feature")),
        ];

        let block = compose(&archive, &prs);
        assert_eq!(
            block,
            "## Changelog\n\
             ### 🐞 Bugs\n\
             - Fix crash (#1)\n\
             ### 💡 Features\n\
             - Add export (#2)\n\
             ### 🧱 Others\n\
             - Untagged cleanup (#3)"
        );
    }

    #[test]
    fn empty_pr_set_composes_bare_heading() {
        let archive = catalog();
        assert_eq!(compose(&archive, &[]), "## Changelog");
    }

    #[test]
    fn merge_appends_when_no_sentinel_present() {
        let merged = merge_into_body("Release notes.\n\n", "## Changelog\n### 🐞 Bugs\n- Fix (#1)");
        assert_eq!(merged, "Release notes.\n\n## Changelog\n### 🐞 Bugs\n- Fix (#1)");
    }

    #[test]
    fn merge_replaces_existing_changelog_span() {
        let body = "Notes.\n\n## Changelog\n### 🐞 Bugs\n- Old (#1)";
        let merged = merge_into_body(body, "## Changelog\n### 🐞 Bugs\n- Fix (#1)\n- New (#2)");
        assert_eq!(merged, "Notes.\n\n## Changelog\n### 🐞 Bugs\n- Fix (#1)\n- New (#2)");
    }

    #[test]
    fn merging_twice_is_byte_identical() {
        let archive = catalog();
        let prs = vec![
            merged_pr(1, "Fix crash", Some("🐞 aspect.Bug")),
            merged_pr(2, "Untagged", None),
        ];
        let block = compose(&archive, &prs);

        let once = merge_into_body("Release notes.", &block);
        let twice = merge_into_body(&once, &compose(&archive, &prs));
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_into_empty_body_is_just_the_block() {
        assert_eq!(merge_into_body("", "## Changelog"), "## Changelog");
    }
}
