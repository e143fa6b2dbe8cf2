use crate::constants::{LINK_SEPARATOR, OsFamily, PlatformCatalog};
use crate::history::types::{VersionEntry, VersionHistory};

pub fn table_header() -> String {
    let titles: Vec<&str> = OsFamily::COLUMNS
        .iter()
        .map(|family| family.column_title())
        .collect();
    let columns = 2 + titles.len();

    format!(
        "| Version | Date | {} |\n|{}",
        titles.join(" | "),
        " --- |".repeat(columns)
    )
}

fn render_cell(entry: &VersionEntry, family: OsFamily, catalog: &PlatformCatalog) -> String {
    let links: Vec<String> = catalog
        .platforms_for(family)
        .iter()
        .filter_map(|platform| {
            entry
                .platforms
                .get(platform)
                .map(|url| format!("[{}]({})", platform, url))
        })
        .collect();

    if links.is_empty() {
        family.empty_cell().to_string()
    } else {
        links.join(LINK_SEPARATOR)
    }
}

pub fn render_row(entry: &VersionEntry, catalog: &PlatformCatalog) -> String {
    let cells: Vec<String> = OsFamily::COLUMNS
        .iter()
        .map(|family| render_cell(entry, *family, catalog))
        .collect();

    format!(
        "| {} | {} | {} |",
        entry.version,
        entry.date,
        cells.join(" | ")
    )
}

/// Header plus one row per history entry, in history order.
pub fn render_table(history: &VersionHistory, catalog: &PlatformCatalog) -> String {
    let rows: Vec<String> = history
        .versions
        .iter()
        .map(|entry| render_row(entry, catalog))
        .collect();

    format!("{}\n{}", table_header(), rows.join("\n"))
}
