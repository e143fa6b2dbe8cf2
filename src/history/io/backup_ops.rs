use crate::ui;
use std::fs;
use std::path::{Path, PathBuf};

/// Move the current document aside. Best-effort: a failure is reported and
/// the save carries on without a backup.
pub(super) fn move_to_backup(path: &Path, backup_path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        return None;
    }

    match fs::rename(path, backup_path) {
        Ok(()) => {
            ui::debug(&format!("Previous history kept at {}", backup_path.display()));
            Some(backup_path.to_path_buf())
        }
        Err(e) => {
            ui::warning(&format!(
                "Failed to back up {} -> {}: {}",
                path.display(),
                backup_path.display(),
                e
            ));
            None
        }
    }
}
