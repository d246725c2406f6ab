//! Event-driven triage engines for the Shepherd repository bot.
//!
//! Built on the `taxonomy` crate, this crate turns repository events into
//! label and comment instructions:
//! - `labels` drives reconciliation create/update instructions against a host
//! - `lifecycle` maps PR actions to status label replacements
//! - `autolabel` derives aspect/priority labels from titles and bodies
//! - `commitcheck` lints proposed commit messages in PR bodies
//! - `changelog` assembles release changelogs from merged PRs
//! - `orchestrator` strings the engines together per webhook event
//!
//! All remote operations go through the [`host::RepoHost`] trait; engines
//! receive already-fetched snapshots and hand instructions back to the host.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

pub mod autolabel;
pub mod changelog;
pub mod commitcheck;
pub mod host;
pub mod labels;
pub mod lifecycle;
pub mod models;
pub mod orchestrator;

pub use host::{PrFilter, PrQuery, ReleaseKind, RepoHost};
pub use models::{Actor, Issue, IssueComment, PrAction, PullRequest, Release};
pub use orchestrator::Bot;
