mod backup_ops;
mod load_recovery;
mod locking;
mod persist;

use crate::constants::{BACKUP_SUFFIX, LOCK_SUFFIX, MAX_HISTORY_ENTRIES, TEMP_SUFFIX};
use crate::error::Result;
use crate::history::types::{CanonicalReport, VersionHistory};
use crate::traits::HistoryStore;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use locking::{HistoryLock, acquire_lock};

/// Where a loaded history came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOrigin {
    /// Parsed from the document on disk
    Existing,
    /// No document yet; one is created on the next save
    Missing,
    /// Document exists but has no content
    Empty,
    /// Document could not be read or parsed; starting fresh
    Corrupted(String),
}

#[derive(Debug, Clone)]
pub struct LoadedHistory {
    pub history: VersionHistory,
    pub origin: HistoryOrigin,
}

impl LoadedHistory {
    pub fn fresh(origin: HistoryOrigin) -> Self {
        Self {
            history: VersionHistory::default(),
            origin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveReport {
    pub path: PathBuf,
    pub entries: usize,
    /// Previous document, when it could be moved aside
    pub backup: Option<PathBuf>,
    /// Target existed after the rename
    pub verified: bool,
    pub normalized: CanonicalReport,
}

/// Report non-fatal history problems
pub fn validate_history_integrity(history: &VersionHistory) -> Vec<String> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for entry in &history.versions {
        if entry.version.trim().is_empty() {
            issues.push(format!("Entry dated '{}' has an empty version", entry.date));
        } else if !seen.insert(entry.version.as_str()) {
            issues.push(format!("Duplicate version: {}", entry.version));
        }
    }

    if !history.is_sorted_descending() {
        issues.push("Versions are not in descending order".to_string());
    }

    if history.len() > MAX_HISTORY_ENTRIES {
        issues.push(format!(
            "History holds {} entries (limit {})",
            history.len(),
            MAX_HISTORY_ENTRIES
        ));
    }

    issues
}

/// `version-history.json` -> `version-history.json.<suffix>`
pub(crate) fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Filesystem-backed history store
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        sibling_path(&self.path, BACKUP_SUFFIX)
    }

    pub fn temp_path(&self) -> PathBuf {
        sibling_path(&self.path, TEMP_SUFFIX)
    }

    pub fn lock_path(&self) -> PathBuf {
        sibling_path(&self.path, LOCK_SUFFIX)
    }

    pub fn lock(&self) -> Result<HistoryLock> {
        acquire_lock(&self.lock_path())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<LoadedHistory> {
        load_recovery::load_history_from_path(&self.path)
    }

    fn save(&self, history: &VersionHistory) -> Result<SaveReport> {
        persist::prepare_and_write_history(history, &self.path)
    }
}
