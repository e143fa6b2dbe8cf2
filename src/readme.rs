//! README download table: rendering from history, splicing into the
//! document, the "last updated" marker, and reading rows back.

mod parse;
mod render;
mod splice;

pub use parse::{RowRef, first_row, parse_links, row_platforms};
pub use render::{render_row, render_table, table_header};
pub use splice::{TablePlacement, find_table, splice_table, stamp_last_updated};

use crate::constants::PlatformCatalog;
use crate::error::{LinksError, Result};
use crate::history::types::VersionHistory;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeReport {
    pub placement: TablePlacement,
    pub rows: usize,
    /// Number of "last updated" markers rewritten
    pub stamps: usize,
}

/// Rewrite the README at `path` so its table renders `history`.
pub fn update_readme(
    path: &Path,
    history: &VersionHistory,
    catalog: &PlatformCatalog,
    timestamp: &str,
) -> Result<ReadmeReport> {
    if !path.exists() {
        return Err(LinksError::ReadmeNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LinksError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (content, report) = rewrite(&content, history, catalog, timestamp);

    fs::write(path, content).map_err(|e| LinksError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(report)
}

/// Pure form of [`update_readme`].
pub fn rewrite(
    content: &str,
    history: &VersionHistory,
    catalog: &PlatformCatalog,
    timestamp: &str,
) -> (String, ReadmeReport) {
    let table = render_table(history, catalog);
    let (content, placement) = splice_table(content, &table);
    let (content, stamps) = stamp_last_updated(&content, timestamp);

    (
        content,
        ReadmeReport {
            placement,
            rows: history.len(),
            stamps,
        },
    )
}
