// Common constants used throughout the codebase

/// Default history document, relative to the working directory
pub const HISTORY_FILE_NAME: &str = "version-history.json";

/// Default README carrying the download table
pub const README_FILE_NAME: &str = "README.md";

/// Suffix of the previous history document kept on every save
pub const BACKUP_SUFFIX: &str = "backup";

/// Suffix of the temporary file used for the atomic replace
pub const TEMP_SUFFIX: &str = "tmp";

/// Suffix of the advisory lock file held during a run
pub const LOCK_SUFFIX: &str = "lock";

/// Maximum number of entries kept in the history
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Version recorded when a download URL carries no recognizable version
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Baseline for the latest-version scan; nothing found if it never moves
pub const BASELINE_VERSION: &str = "0.0.0";

/// Per-request ceiling for the download API
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Offset of the timestamps written to history and README (UTC+8)
pub const UTC_OFFSET_HOURS: i32 = 8;

/// Label of the "last updated" marker line in the README
pub const TIMESTAMP_LABEL: &str = "脚本最后更新";

/// Separator between links inside one table cell
pub const LINK_SEPARATOR: &str = "<br>";

/// Cell text for an OS family that has no downloads yet
pub const NOT_READY: &str = "Not Ready";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
