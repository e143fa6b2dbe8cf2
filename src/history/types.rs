use crate::constants::MAX_HISTORY_ENTRIES;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One shipped version and its known download URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Dotted numeric triple, e.g. "0.48.7"
    pub version: String,

    /// YYYY-MM-DD (UTC+8) of the run that recorded the entry
    pub date: String,

    /// Platform id -> download URL
    #[serde(default)]
    pub platforms: BTreeMap<String, String>,
}

impl VersionEntry {
    pub fn new(
        version: impl Into<String>,
        date: impl Into<String>,
        platforms: BTreeMap<String, String>,
    ) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            platforms,
        }
    }
}

/// The persisted `version-history.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHistory {
    pub versions: Vec<VersionEntry>,
}

/// What `canonicalize` changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalReport {
    pub blank_removed: usize,
    pub duplicates_removed: usize,
    pub truncated: usize,
}

impl VersionHistory {
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn position(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|entry| entry.version == version)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.position(version).is_some()
    }

    pub fn get(&self, version: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|entry| entry.version == version)
    }

    /// Drop repeated versions, keeping the first occurrence. Returns the
    /// number of entries removed.
    pub fn dedup_by_version(&mut self) -> usize {
        let before = self.versions.len();
        let mut seen = HashSet::new();
        self.versions.retain(|entry| seen.insert(entry.version.clone()));
        before - self.versions.len()
    }

    /// Stable descending sort on the raw version string.
    ///
    /// Plain string comparison: "1.10.0" sorts below "1.9.0".
    pub fn sort_descending(&mut self) {
        self.versions.sort_by(|a, b| b.version.cmp(&a.version));
    }

    /// Keep at most `max` entries. Returns the number of entries dropped.
    pub fn truncate_to(&mut self, max: usize) -> usize {
        let dropped = self.versions.len().saturating_sub(max);
        self.versions.truncate(max);
        dropped
    }

    /// Drop entries whose version is blank. Returns the number removed.
    pub fn drop_blank_versions(&mut self) -> usize {
        let before = self.versions.len();
        self.versions.retain(|entry| !entry.version.trim().is_empty());
        before - self.versions.len()
    }

    /// Drop blanks, dedup, sort, cap: the form every saved history is in.
    pub fn canonicalize(&mut self) -> CanonicalReport {
        let blank_removed = self.drop_blank_versions();
        let duplicates_removed = self.dedup_by_version();
        self.sort_descending();
        let truncated = self.truncate_to(MAX_HISTORY_ENTRIES);
        CanonicalReport {
            blank_removed,
            duplicates_removed,
            truncated,
        }
    }

    pub fn is_sorted_descending(&self) -> bool {
        self.versions
            .windows(2)
            .all(|pair| pair[0].version >= pair[1].version)
    }
}
