//! Seams for dependency injection and testability
//!
//! The update flow depends on these traits rather than on the HTTP client
//! and the filesystem store directly, so tests can substitute canned
//! download URLs and in-memory histories.

use crate::error::Result;
use crate::history::io::{LoadedHistory, SaveReport};
use crate::history::types::VersionHistory;

/// Source of download URLs, one per platform id
pub trait ReleaseSource: Send + Sync {
    /// Latest download URL for `platform` on the configured release track
    fn download_url(&self, platform: &str) -> Result<String>;
}

/// Trait for history persistence
pub trait HistoryStore: Send + Sync {
    /// Load the history; a missing or unreadable document is an empty history
    fn load(&self) -> Result<LoadedHistory>;

    /// Validate and atomically persist the history
    fn save(&self, history: &VersionHistory) -> Result<SaveReport>;
}
