//! Commit message proposal linting.
//!
//! A PR body may propose its final commit message in a fenced block following
//! a `Commit Message:` marker. The proposal is linted and the findings posted
//! as one comment. Re-posting is idempotent: the proposal quoted in the
//! newest report comment is compared against the freshly extracted one, and
//! an unchanged proposal never produces a duplicate comment.

use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;
use tracing::debug;

use crate::host::RepoHost;
use crate::models::{IssueComment, PullRequest};

/// Marker identifying the bot's lint report comments.
pub const REPORT_TITLE: &str = "# Commit Message Lint";

/// Maximum commit message line width.
pub const MAX_LINE_LENGTH: usize = 72;

fn proposal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)commit message:\s*```\s*(.*?)\s*```").unwrap())
}

/// Extracts the proposed commit message from a PR body, if one is declared.
#[must_use]
pub fn extract_proposal(body: &str) -> Option<String> {
    proposal_re()
        .captures(body)
        .map(|captures| captures[1].to_string())
}

/// One lint finding, rendered as a markdown list entry.
fn fragment(passed: bool, pass_text: &str, fail_text: &str) -> String {
    if passed {
        format!("- ✅ {pass_text}")
    } else {
        format!("- ❌ {fail_text}")
    }
}

/// Lints a proposal. Returns the findings as markdown fragments plus whether
/// every check passed.
#[must_use]
pub fn lint(message: &str) -> (bool, Vec<String>) {
    let lines: Vec<&str> = message.lines().collect();
    let mut fragments = Vec::new();
    let mut all_passed = true;

    let title_ok = !lines.first().unwrap_or(&"").ends_with('.');
    all_passed &= title_ok;
    fragments.push(fragment(
        title_ok,
        "The title does not end with a full stop.",
        "The title must not end with a full stop.",
    ));

    let overlong: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > MAX_LINE_LENGTH)
        .map(|(index, line)| format!("line {} is {} characters", index + 1, line.chars().count()))
        .collect();
    let width_ok = overlong.is_empty();
    all_passed &= width_ok;
    fragments.push(fragment(
        width_ok,
        &format!("Every line is within {MAX_LINE_LENGTH} characters."),
        &format!("Lines must be at most {MAX_LINE_LENGTH} characters: {}.", overlong.join(", ")),
    ));

    if lines.len() > 1 {
        let separated = lines[1].trim().is_empty();
        all_passed &= separated;
        fragments.push(fragment(
            separated,
            "The title and body are separated by a blank line.",
            "The second line must be blank to separate the title from the body.",
        ));
    }

    (all_passed, fragments)
}

/// Renders the full report: marker, the proposal quoted back, one fragment
/// per check.
#[must_use]
pub fn build_report(message: &str) -> String {
    let mut report = format!("{REPORT_TITLE}\n\n");
    for line in message.lines() {
        let _ = writeln!(report, "> {line}");
    }
    report.push('\n');

    let (_, fragments) = lint(message);
    report.push_str(&fragments.join("\n"));
    report
}

/// Recovers the quoted proposal from a previously posted report.
#[must_use]
pub fn proposal_from_report(comment_body: &str) -> Option<String> {
    let quoted: Vec<&str> = comment_body
        .lines()
        .skip_while(|line| !line.starts_with('>'))
        .take_while(|line| line.starts_with('>'))
        .map(|line| line.strip_prefix("> ").or_else(|| line.strip_prefix('>')).unwrap_or(line))
        .collect();

    if quoted.is_empty() {
        None
    } else {
        Some(quoted.join("\n"))
    }
}

/// The proposal quoted in the newest of the bot's report comments.
fn latest_reported_proposal(comments: &[IssueComment], bot_login: &str) -> Option<String> {
    comments
        .iter()
        .filter(|comment| {
            comment.body.contains(REPORT_TITLE)
                && comment
                    .user
                    .as_ref()
                    .is_some_and(|user| user.login == bot_login)
        })
        .max_by_key(|comment| comment.created_at)
        .and_then(|comment| proposal_from_report(&comment.body))
}

/// Validates a PR's commit message proposal and posts the lint report.
///
/// Draft PRs and bodies without a proposal block are no-op successes. An
/// unchanged proposal (compared against the newest previously posted report)
/// is also a no-op.
pub async fn validate_commit_message<H: RepoHost + ?Sized>(host: &H, bot_login: &str, pr: &PullRequest) -> bool {
    if pr.draft {
        return true;
    }
    let Some(body) = pr.body.as_deref() else {
        return true;
    };
    let Some(message) = extract_proposal(body) else {
        return true;
    };

    let comments = host.list_comments(pr.number).await;
    if latest_reported_proposal(&comments, bot_login).as_deref() == Some(message.as_str()) {
        debug!(pr = pr.number, "commit message proposal unchanged, skipping report");
        return true;
    }

    host.post_comment(pr.number, &build_report(&message)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fenced_proposal() {
        let body = "Some intro.\n\nCommit Message:\n```\nAdd widget support\n\nBody text.\n```\n";
        assert_eq!(
            extract_proposal(body).as_deref(),
            Some("Add widget support\n\nBody text.")
        );
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let body = "commit message: ```\nFix the thing\n```";
        assert_eq!(extract_proposal(body).as_deref(), Some("Fix the thing"));
    }

    #[test]
    fn missing_block_yields_none() {
        assert_eq!(extract_proposal("Just a plain body."), None);
    }

    #[test]
    fn title_trailing_full_stop_fails() {
        let (passed, fragments) = lint("Fix the thing.");
        assert!(!passed);
        assert!(fragments[0].starts_with("- ❌"));
    }

    #[test]
    fn line_of_72_passes_73_fails() {
        let ok = "a".repeat(72);
        let (passed, _) = lint(&ok);
        assert!(passed);

        let overlong = "a".repeat(73);
        let (passed, fragments) = lint(&overlong);
        assert!(!passed);
        assert!(fragments[1].contains("73 characters"));
    }

    #[test]
    fn second_line_must_be_blank_when_body_exists() {
        let (passed, _) = lint("Title\n\nBody");
        assert!(passed);

        let (passed, fragments) = lint("Title\nBody without separation");
        assert!(!passed);
        assert!(fragments[2].starts_with("- ❌"));
    }

    #[test]
    fn single_line_message_skips_separation_check() {
        let (passed, fragments) = lint("Title only");
        assert!(passed);
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn report_round_trips_the_proposal() {
        let message = "Add widget support\n\nBody text.";
        let report = build_report(message);
        assert!(report.starts_with(REPORT_TITLE));
        assert_eq!(proposal_from_report(&report).as_deref(), Some(message));
    }

    #[test]
    fn report_without_quote_yields_none() {
        assert_eq!(proposal_from_report("# Commit Message Lint\n\nnothing quoted"), None);
    }
}
