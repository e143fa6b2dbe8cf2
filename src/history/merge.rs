//! Merger: folds one round of fetched URLs into the history.

use crate::history::types::{VersionEntry, VersionHistory};
use crate::ui;
use std::collections::BTreeMap;

/// Entry to record for the latest version seen this round.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub version: String,
    pub date: String,
    pub platforms: BTreeMap<String, String>,
    /// Replace the entry even when the version is already recorded
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Appended,
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub version: String,
    pub action: MergeAction,
    pub duplicates_removed: usize,
    pub truncated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(MergeReport),
    /// Version already recorded and no force requested; history untouched
    AlreadyRecorded { version: String },
}

pub fn merge_entry(history: &mut VersionHistory, request: MergeRequest) -> MergeOutcome {
    let existing = history.position(&request.version);

    if existing.is_some() && !request.force {
        return MergeOutcome::AlreadyRecorded {
            version: request.version,
        };
    }

    let version = request.version.clone();
    let entry = VersionEntry::new(request.version, request.date, request.platforms);

    let action = match existing {
        Some(index) => {
            ui::info(&format!("Updating version {} in version history", version));
            history.versions[index] = entry;
            MergeAction::Replaced
        }
        None => {
            ui::info(&format!("Adding new version {} to version history", version));
            history.versions.push(entry);
            MergeAction::Appended
        }
    };

    let canonical = history.canonicalize();
    if canonical.blank_removed > 0 {
        ui::warning(&format!(
            "Dropped {} entry(ies) without a version",
            canonical.blank_removed
        ));
    }
    if canonical.duplicates_removed > 0 {
        ui::info(&format!(
            "Removed {} duplicate version(s)",
            canonical.duplicates_removed
        ));
    }
    if canonical.truncated > 0 {
        ui::info(&format!(
            "Truncated version history to {} entries",
            history.len()
        ));
    }

    MergeOutcome::Merged(MergeReport {
        version,
        action,
        duplicates_removed: canonical.duplicates_removed,
        truncated: canonical.truncated,
    })
}
