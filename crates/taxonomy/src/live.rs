//! Live-label projection.

use serde::{Deserialize, Deserializer, Serialize};

/// A label as currently reported by the repository platform.
///
/// Transient: fetched per reconciliation pass or carried on a PR/issue
/// snapshot, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveLabel {
    pub name: String,
    /// The platform reports `null` for labels created without a description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub color: String,
}

impl LiveLabel {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            color: String::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
