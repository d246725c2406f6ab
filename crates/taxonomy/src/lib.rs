//! Canonical label taxonomy for the Shepherd repository bot.
//!
//! This crate holds the source of truth for every label the bot manages:
//! - The label value types (`Label`, `LabelKind`, `Category`)
//! - Validated, kind-unique collections grouped into a `LabelArchive`
//! - The built-in catalog the bot ships with
//! - A pure reconciliation pass that diffs the archive against the labels a
//!   repository currently carries
//!
//! Everything here is synchronous, in-memory computation. Driving the
//! resulting create/update instructions against a repository host lives in
//! the `triage` crate.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod catalog;
pub mod collection;
pub mod label;
pub mod live;
pub mod reconcile;

pub use archive::LabelArchive;
pub use catalog::catalog;
pub use collection::{LabelCollection, TaxonomyDefect};
pub use label::{AspectKind, Category, ChangelogKind, IssueKind, Label, LabelKind, PrKind, PriorityKind};
pub use live::LiveLabel;
pub use reconcile::{diff, Reconciliation};
