//! Wall-clock helpers pinned to the UTC+8 offset used in history dates and
//! the README "last updated" marker.

use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT, UTC_OFFSET_HOURS};
use chrono::{DateTime, FixedOffset, Offset, Utc};

pub fn offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset())
}

/// `YYYY-MM-DD`
pub fn format_date(at: &DateTime<FixedOffset>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
