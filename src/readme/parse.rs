use crate::constants::NOT_READY;
use crate::error::{LinksError, Result};
use regex::Regex;
use std::sync::LazyLock;

static VERSION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\| (\d+\.\d+\.\d+) \| (\d{4}-\d{2}-\d{2}) \|").expect("Invalid regex pattern")
});

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid regex pattern"));

/// Version and date of a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    pub version: String,
    pub date: String,
}

/// First `| version | date |` pair in the document.
pub fn first_row(content: &str) -> Option<RowRef> {
    let caps = VERSION_DATE.captures(content)?;
    Some(RowRef {
        version: caps.get(1)?.as_str().to_string(),
        date: caps.get(2)?.as_str().to_string(),
    })
}

/// `[label](url)` pairs of one cell; "Not Ready" and empty cells yield none.
pub fn parse_links(cell: &str) -> Vec<(String, String)> {
    let cell = cell.trim();
    if cell.is_empty() || cell == NOT_READY {
        return Vec::new();
    }

    MARKDOWN_LINK
        .captures_iter(cell)
        .filter_map(|caps| Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string())))
        .collect()
}

/// Links of the three installer cells of the row for `row`, in column
/// order. `None` when the row cannot be found.
pub fn row_platforms(content: &str, row: &RowRef) -> Result<Option<Vec<(String, String)>>> {
    let pattern = format!(
        r"\| {} \| {} \| (.*?) \| (.*?) \| (.*?) \|",
        regex::escape(&row.version),
        regex::escape(&row.date)
    );
    let row_re = Regex::new(&pattern)
        .map_err(|e| LinksError::Other(format!("Invalid row pattern: {}", e)))?;

    let Some(caps) = row_re.captures(content) else {
        return Ok(None);
    };

    let links = (1..=3)
        .filter_map(|group| caps.get(group))
        .flat_map(|cell| parse_links(cell.as_str()))
        .collect();
    Ok(Some(links))
}
