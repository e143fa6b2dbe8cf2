//! Enumerated download platforms, grouped by operating system family.
//!
//! The catalog is an immutable value: it is built once and handed to the
//! fetcher, the renderer and the integrity checker.

use std::fmt;

/// Operating system family; one README column each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    Mac,
    Linux,
}

impl OsFamily {
    /// Column order of the README download table.
    pub const COLUMNS: [OsFamily; 3] = [OsFamily::Mac, OsFamily::Windows, OsFamily::Linux];

    pub fn key(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Mac => "mac",
            OsFamily::Linux => "linux",
        }
    }

    pub fn column_title(self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows Installer",
            OsFamily::Mac => "Mac Installer",
            OsFamily::Linux => "Linux Installer",
        }
    }

    /// Cell text when the family has no links for a version.
    pub fn empty_cell(self) -> &'static str {
        match self {
            OsFamily::Linux => super::NOT_READY,
            OsFamily::Windows | OsFamily::Mac => "",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformGroup {
    pub family: OsFamily,
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCatalog {
    // Fetch order
    groups: Vec<PlatformGroup>,
}

impl PlatformCatalog {
    pub fn new(groups: Vec<PlatformGroup>) -> Self {
        Self { groups }
    }

    /// Platforms published by the Cursor download API.
    pub fn standard() -> Self {
        let group = |family, ids: &[&str]| PlatformGroup {
            family,
            platforms: ids.iter().map(|id| id.to_string()).collect(),
        };

        Self::new(vec![
            group(OsFamily::Windows, &["win32-x64", "win32-arm64"]),
            group(
                OsFamily::Mac,
                &["darwin-universal", "darwin-x64", "darwin-arm64"],
            ),
            group(OsFamily::Linux, &["linux-x64", "linux-arm64"]),
        ])
    }

    pub fn groups(&self) -> &[PlatformGroup] {
        &self.groups
    }

    /// Every (family, platform) pair in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = (OsFamily, &str)> {
        self.groups.iter().flat_map(|group| {
            group
                .platforms
                .iter()
                .map(move |platform| (group.family, platform.as_str()))
        })
    }

    pub fn platforms_for(&self, family: OsFamily) -> &[String] {
        self.groups
            .iter()
            .find(|group| group.family == family)
            .map(|group| group.platforms.as_slice())
            .unwrap_or(&[])
    }

    pub fn family_of(&self, platform: &str) -> Option<OsFamily> {
        self.iter()
            .find(|(_, id)| *id == platform)
            .map(|(family, _)| family)
    }

    pub fn contains(&self, platform: &str) -> bool {
        self.family_of(platform).is_some()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.platforms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
