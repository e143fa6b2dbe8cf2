use crate::constants::{BACKUP_SUFFIX, TEMP_SUFFIX};
use crate::error::{LinksError, Result};
use crate::history::types::{CanonicalReport, VersionHistory};
use crate::ui;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::backup_ops::move_to_backup;
use super::{SaveReport, sibling_path};

pub(super) fn prepare_and_write_history(history: &VersionHistory, path: &Path) -> Result<SaveReport> {
    let mut history = history.clone();
    let normalized = history.canonicalize();
    if normalized.blank_removed > 0 {
        ui::warning(&format!(
            "Dropped {} entry(ies) without a version before saving",
            normalized.blank_removed
        ));
    }
    if normalized.duplicates_removed > 0 {
        ui::info(&format!(
            "Removed {} duplicate version(s) before saving",
            normalized.duplicates_removed
        ));
    }
    if normalized.truncated > 0 {
        ui::info(&format!(
            "Truncated version history to {} entries",
            history.len()
        ));
    }

    write_history_atomically(path, &history, normalized)
}

fn write_history_atomically(
    path: &Path,
    history: &VersionHistory,
    normalized: CanonicalReport,
) -> Result<SaveReport> {
    let mut content = serde_json::to_string_pretty(history).map_err(|e| {
        LinksError::SerializationError(format!("Version history serialization: {}", e))
    })?;
    content.push('\n');

    let _: VersionHistory = serde_json::from_str(&content)
        .map_err(|e| LinksError::SerializationError(format!("Invalid JSON generated: {}", e)))?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| LinksError::IoError {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    // Stage the new document before touching the current one
    let tmp_path = sibling_path(path, TEMP_SUFFIX);
    let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| LinksError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    let backup = move_to_backup(path, &sibling_path(path, BACKUP_SUFFIX));

    fs::rename(&tmp_path, path).map_err(|e| LinksError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let verified = path.exists();
    if !verified {
        ui::error(&format!(
            "Saving version history failed: {} does not exist after write",
            path.display()
        ));
    }

    Ok(SaveReport {
        path: path.to_path_buf(),
        entries: history.len(),
        backup,
        verified,
        normalized,
    })
}
