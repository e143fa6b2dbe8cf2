use crate::constants::TIMESTAMP_LABEL;
use regex::{NoExpand, Regex};
use std::ops::Range;
use std::sync::LazyLock;

static TABLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\| Version \| Date \| Mac Installer \| Windows Installer \| Linux Installer \|\s*\n\|\s*---\s*\|\s*---\s*\|\s*---\s*\|\s*---\s*\|\s*---\s*\|",
    )
    .expect("Invalid regex pattern")
});

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n").expect("Invalid regex pattern"));

static LAST_UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}: `[^`]*`", regex::escape(TIMESTAMP_LABEL)))
        .expect("Invalid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePlacement {
    Replaced,
    Appended,
}

/// Byte range of the first download table; it runs to the next blank line
/// (LF or CRLF) or the end of the document.
pub fn find_table(content: &str) -> Option<Range<usize>> {
    let header = TABLE_HEADER.find(content)?;
    let end = BLANK_LINE
        .find(&content[header.end()..])
        .map(|blank| header.end() + blank.start())
        .unwrap_or(content.len());
    Some(header.start()..end)
}

pub fn splice_table(content: &str, table: &str) -> (String, TablePlacement) {
    match find_table(content) {
        Some(range) => {
            let mut spliced = String::with_capacity(content.len() + table.len());
            spliced.push_str(&content[..range.start]);
            spliced.push_str(table);
            spliced.push_str(&content[range.end..]);
            (spliced, TablePlacement::Replaced)
        }
        None => (format!("{}\n\n{}\n", content, table), TablePlacement::Appended),
    }
}

/// Rewrite every "last updated" marker; returns the new text and the
/// number of markers found.
pub fn stamp_last_updated(content: &str, timestamp: &str) -> (String, usize) {
    let count = LAST_UPDATED.find_iter(content).count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    let replacement = format!("{}: `{}`", TIMESTAMP_LABEL, timestamp);
    let stamped = LAST_UPDATED
        .replace_all(content, NoExpand(&replacement))
        .into_owned();
    (stamped, count)
}
