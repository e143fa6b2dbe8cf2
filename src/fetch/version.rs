use crate::constants::UNKNOWN_VERSION;
use regex::Regex;
use std::sync::LazyLock;

/// Windows installers embed the version in the file name:
/// `CursorUserSetup-x64-0.48.7.exe`
static WINDOWS_INSTALLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"CursorUserSetup-[^-]+-([0-9.]+)\.exe").expect("Invalid regex pattern")
});

static DOTTED_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").expect("Invalid regex pattern"));

/// Pull the release version out of a download URL, or `"Unknown"`.
pub fn extract_version(url: &str) -> String {
    if let Some(caps) = WINDOWS_INSTALLER.captures(url)
        && let Some(version) = caps.get(1)
        && !version.as_str().is_empty()
    {
        return version.as_str().to_string();
    }

    DOTTED_TRIPLE
        .find(url)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

pub fn is_known(version: &str) -> bool {
    version != UNKNOWN_VERSION
}
