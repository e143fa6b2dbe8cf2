//! Central project identity contract.
//!
//! Single source of truth for runtime identity values and the download API
//! this tool talks to.

pub const DISPLAY_NAME: &str = "Cursor Links";
pub const BINARY_NAME: &str = "cursor-links";

/// Sent with every download API request.
pub const USER_AGENT: &str = "Cursor-Version-Checker";

pub const DOWNLOAD_API_BASE: &str = "https://www.cursor.com/api/download";

/// Release track queried from the download API.
pub const RELEASE_TRACK: &str = "latest";

pub fn download_api_url(base: &str, platform: &str, track: &str) -> String {
    format!("{}?platform={}&releaseTrack={}", base, platform, track)
}

pub fn cli_with(args: &str) -> String {
    format!("{} {}", BINARY_NAME, args)
}
