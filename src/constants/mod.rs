pub mod common;
pub mod platforms;

pub use common::{
    BACKUP_SUFFIX, BASELINE_VERSION, DATE_FORMAT, HISTORY_FILE_NAME, HTTP_TIMEOUT_SECS,
    LINK_SEPARATOR, LOCK_SUFFIX, MAX_HISTORY_ENTRIES, NOT_READY, README_FILE_NAME, TEMP_SUFFIX,
    TIMESTAMP_FORMAT, TIMESTAMP_LABEL, UNKNOWN_VERSION, UTC_OFFSET_HOURS,
};
pub use platforms::{OsFamily, PlatformCatalog};
