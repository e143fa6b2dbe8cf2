//! Post-run reconciliation of the README table against the history.
//!
//! One direction only: a version shown in the README's first row but
//! missing from the history is rebuilt from the row's links and saved.

use crate::constants::PlatformCatalog;
use crate::error::{LinksError, Result};
use crate::history::io::HistoryOrigin;
use crate::history::types::VersionEntry;
use crate::readme::{self, RowRef};
use crate::traits::HistoryStore;
use crate::ui;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityReport {
    /// README's first version is recorded in the history
    Consistent { version: String },
    /// History was missing the README's first version and has been repaired
    Repaired { version: String, platforms: usize },
    /// Check could not run; nothing was changed
    Skipped(String),
}

pub fn verify_file_integrity(
    store: &dyn HistoryStore,
    readme_path: &Path,
    catalog: &PlatformCatalog,
) -> Result<IntegrityReport> {
    let loaded = store.load()?;
    match loaded.origin {
        HistoryOrigin::Missing => {
            return Ok(skip("version history does not exist after update"));
        }
        HistoryOrigin::Corrupted(reason) => {
            return Ok(skip(&format!("version history is not valid JSON: {}", reason)));
        }
        HistoryOrigin::Existing | HistoryOrigin::Empty => {}
    }
    let mut history = loaded.history;

    if !readme_path.exists() {
        return Ok(skip("README does not exist, cannot verify consistency"));
    }
    let content = fs::read_to_string(readme_path).map_err(|e| LinksError::IoError {
        path: readme_path.to_path_buf(),
        source: e,
    })?;

    let Some(row) = readme::first_row(&content) else {
        return Ok(skip("could not extract a version row from the README"));
    };

    if history.contains(&row.version) {
        ui::debug(&format!("README and history agree on {}", row.version));
        return Ok(IntegrityReport::Consistent {
            version: row.version,
        });
    }

    ui::warning(&format!(
        "Version {} is in the README but not in the version history",
        row.version
    ));

    let Some(platforms) = recover_platforms(&content, &row, catalog)? else {
        return Ok(skip(&format!(
            "could not find the README row for version {}",
            row.version
        )));
    };
    if platforms.is_empty() {
        return Ok(skip(&format!(
            "no platform links found for version {}",
            row.version
        )));
    }

    let count = platforms.len();
    history
        .versions
        .push(VersionEntry::new(row.version.clone(), row.date, platforms));
    history.sort_descending();
    store.save(&history)?;

    ui::success(&format!(
        "Synced version {} from the README with {} platform link(s)",
        row.version, count
    ));
    Ok(IntegrityReport::Repaired {
        version: row.version,
        platforms: count,
    })
}

fn recover_platforms(
    content: &str,
    row: &RowRef,
    catalog: &PlatformCatalog,
) -> Result<Option<BTreeMap<String, String>>> {
    let Some(links) = readme::row_platforms(content, row)? else {
        return Ok(None);
    };

    let mut platforms = BTreeMap::new();
    for (platform, url) in links {
        if !catalog.contains(&platform) {
            ui::warning(&format!(
                "Ignoring README link for unknown platform '{}'",
                platform
            ));
            continue;
        }
        platforms.insert(platform, url);
    }
    Ok(Some(platforms))
}

fn skip(reason: &str) -> IntegrityReport {
    ui::warning(&format!("Integrity check skipped: {}", reason));
    IntegrityReport::Skipped(reason.to_string())
}
