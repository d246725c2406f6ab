//! Label value types.
//!
//! A canonical label is namespaced as `"<emoji> <category>.<Kind>"` so that
//! every label the bot manages is visually grouped on the repository and can
//! be recognized by namespace even after a human edits its color or
//! description.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::live::LiveLabel;

/// Grouping of labels by purpose. The lowercase form is the namespace that
/// prefixes every managed label name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// What an issue or PR is about (bug, feature, docs, ...).
    Aspect,
    /// Where a pull request sits in its review lifecycle.
    Pr,
    /// How urgently an issue should be handled.
    Priority,
    /// Changelog composition controls.
    Changelog,
    /// Issue triage outcomes (wontfix, duplicate, ...).
    Issue,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aspect => "aspect",
            Self::Pr => "pr",
            Self::Priority => "priority",
            Self::Changelog => "changelog",
            Self::Issue => "issue",
        }
    }

    /// The `"<category>."` prefix that identifies a managed label name as
    /// belonging to this category.
    #[must_use]
    pub fn namespace(self) -> String {
        format!("{}.", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect kinds. `Documentation` renders as `Doc` in label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Bug,
    Process,
    Feature,
    Enhancement,
    Documentation,
}

impl AspectKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Process => "Process",
            Self::Feature => "Feature",
            Self::Enhancement => "Enhancement",
            Self::Documentation => "Doc",
        }
    }
}

/// Pull request lifecycle kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrKind {
    ToReview,
    ToMerge,
    OnGoing,
    OnHold,
}

impl PrKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToReview => "ToReview",
            Self::ToMerge => "ToMerge",
            Self::OnGoing => "OnGoing",
            Self::OnHold => "OnHold",
        }
    }
}

/// Priority kinds, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityKind {
    Urgent,
    High,
    Medium,
    Low,
}

impl PriorityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Changelog composition controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangelogKind {
    /// Keeps a merged PR out of the release changelog.
    DoNotList,
}

impl ChangelogKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoNotList => "DoNotList",
        }
    }
}

/// Issue triage outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    WontFix,
    GoodFirstIssue,
    Duplicate,
}

impl IssueKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WontFix => "WontFix",
            Self::GoodFirstIssue => "GoodFirstIssue",
            Self::Duplicate => "Duplicate",
        }
    }
}

/// A label kind, tagged with the category it belongs to. Within one
/// collection each kind may appear at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Aspect(AspectKind),
    Pr(PrKind),
    Priority(PriorityKind),
    Changelog(ChangelogKind),
    Issue(IssueKind),
}

impl LabelKind {
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Aspect(_) => Category::Aspect,
            Self::Pr(_) => Category::Pr,
            Self::Priority(_) => Category::Priority,
            Self::Changelog(_) => Category::Changelog,
            Self::Issue(_) => Category::Issue,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aspect(kind) => kind.as_str(),
            Self::Pr(kind) => kind.as_str(),
            Self::Priority(kind) => kind.as_str(),
            Self::Changelog(kind) => kind.as_str(),
            Self::Issue(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category(), self.as_str())
    }
}

/// An immutable canonical label.
///
/// Two labels are considered equal when their identity digests match, which
/// is the case exactly when name, description and color all match.
#[derive(Debug, Clone)]
pub struct Label {
    name: String,
    description: String,
    color: String,
    aliases: Vec<String>,
    kind: LabelKind,
}

impl Label {
    /// Builds a label with the namespaced name `"<emoji> <category>.<Kind>"`.
    ///
    /// Aliases are lowercase substrings used to recognize an equivalent live
    /// label during reconciliation; their declaration order is the match
    /// precedence.
    #[must_use]
    pub fn new(kind: LabelKind, emoji: &str, description: &str, color: &str, aliases: &[&str]) -> Self {
        Self {
            name: format!("{emoji} {kind}"),
            description: description.to_string(),
            color: color.to_string(),
            aliases: aliases.iter().map(|alias| alias.to_lowercase()).collect(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[must_use]
    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    /// Stable hex digest over (name, description, color).
    #[must_use]
    pub fn identity(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update(self.description.as_bytes());
        hasher.update(self.color.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Whether a live label is already an exact rendition of this label.
    #[must_use]
    pub fn matches_live(&self, live: &LiveLabel) -> bool {
        self.name == live.name && self.description == live.description && self.color == live.color
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.description == other.description && self.color == other.color
    }
}

impl Eq for Label {}
