use crate::error::Result;
use crate::history::types::VersionHistory;
use crate::ui;
use std::fs;
use std::path::Path;

use super::{HistoryOrigin, LoadedHistory, validate_history_integrity};

pub(super) fn load_history_from_path(path: &Path) -> Result<LoadedHistory> {
    if !path.exists() {
        ui::warning(&format!(
            "{} not found, a new history will be created",
            path.display()
        ));
        return Ok(LoadedHistory::fresh(HistoryOrigin::Missing));
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            ui::error(&format!("Failed to read version history: {}", e));
            return Ok(start_fresh(e.to_string()));
        }
    };

    if content.trim().is_empty() {
        return Ok(LoadedHistory::fresh(HistoryOrigin::Empty));
    }

    match serde_json::from_str::<VersionHistory>(&content) {
        Ok(history) => {
            let issues = validate_history_integrity(&history);
            if !issues.is_empty() {
                ui::warning("Version history integrity issues detected:");
                for issue in &issues {
                    ui::indent(&format!("• {}", issue), 2);
                }
            }
            Ok(LoadedHistory {
                history,
                origin: HistoryOrigin::Existing,
            })
        }
        Err(e) => {
            ui::error(&format!("Version history corrupted: {}", e));
            Ok(start_fresh(e.to_string()))
        }
    }
}

fn start_fresh(reason: String) -> LoadedHistory {
    ui::info("Starting from an empty version history");
    LoadedHistory::fresh(HistoryOrigin::Corrupted(reason))
}
