//! Priority manifests and candidate flattening
//!
//! A manifest is an ordered list of tiers. Each tier is either a single
//! filename or a set of filenames that share the same priority. Position in
//! the manifest is the priority index: 0 is the most preferred.

use serde::{Deserialize, Serialize};

/// One priority tier: a single filename, or several co-equal filenames.
///
/// Serializes untagged, so a tier is written as either `"package.json"` or
/// `["yarn.lock", "pnpm-lock.yaml"]` in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchKey {
    Single(String),
    Tier(Vec<String>),
}

impl SearchKey {
    /// A tier holding one filename
    pub fn single(name: impl Into<String>) -> Self {
        SearchKey::Single(name.into())
    }

    /// A tier holding several co-equal filenames
    pub fn tier<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchKey::Tier(names.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for SearchKey {
    fn from(name: &str) -> Self {
        SearchKey::Single(name.to_string())
    }
}

impl From<String> for SearchKey {
    fn from(name: String) -> Self {
        SearchKey::Single(name)
    }
}

impl From<Vec<String>> for SearchKey {
    fn from(names: Vec<String>) -> Self {
        SearchKey::Tier(names)
    }
}

/// An ordered list of tiers; the index of a tier is its priority.
pub type PriorityManifest = Vec<SearchKey>;

/// A single filename paired with the priority index of the tier it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub priority: usize,
}

/// Flatten a manifest into candidates, preserving tier order.
///
/// Every filename in a tier carries that tier's index. Duplicate filenames
/// across tiers are kept; each occurrence is evaluated independently.
pub fn flatten(manifest: &[SearchKey]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (priority, key) in manifest.iter().enumerate() {
        match key {
            SearchKey::Single(name) => candidates.push(Candidate {
                name: name.clone(),
                priority,
            }),
            SearchKey::Tier(names) => {
                for name in names {
                    candidates.push(Candidate {
                        name: name.clone(),
                        priority,
                    });
                }
            }
        }
    }

    candidates
}
