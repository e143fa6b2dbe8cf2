//! Fetcher: one download API request per catalog platform, with the
//! release version pulled out of each returned URL.

mod client;
mod version;

pub use client::{FetcherConfig, HttpReleaseSource};
pub use version::{extract_version, is_known};

use crate::constants::{BASELINE_VERSION, OsFamily, PlatformCatalog};
use crate::error::{LinksError, Result};
use crate::traits::ReleaseSource;
use crate::ui;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub url: String,
    pub version: String,
}

/// Outcome for a single platform; `result` is `None` when the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformFetch {
    pub family: OsFamily,
    pub platform: String,
    pub result: Option<FetchResult>,
}

/// Everything one pass over the catalog produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRound {
    pub platforms: Vec<PlatformFetch>,
}

impl FetchRound {
    pub fn successes(&self) -> impl Iterator<Item = (&str, &FetchResult)> {
        self.platforms.iter().filter_map(|fetch| {
            fetch
                .result
                .as_ref()
                .map(|result| (fetch.platform.as_str(), result))
        })
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// Highest known version string seen this round, compared as plain
    /// strings against the "0.0.0" baseline.
    pub fn latest_version(&self) -> Option<String> {
        let latest = self
            .successes()
            .map(|(_, result)| result.version.as_str())
            .filter(|version| is_known(version))
            .fold(BASELINE_VERSION, |best, version| {
                if version > best { version } else { best }
            });

        (latest != BASELINE_VERSION).then(|| latest.to_string())
    }

    /// Every URL fetched this round, regardless of the version it carries.
    pub fn platform_urls(&self) -> BTreeMap<String, String> {
        self.successes()
            .map(|(platform, result)| (platform.to_string(), result.url.clone()))
            .collect()
    }

    /// Platforms whose URL carries a version other than `version`.
    pub fn mismatched(&self, version: &str) -> Vec<&str> {
        self.successes()
            .filter(|(_, result)| result.version != version)
            .map(|(platform, _)| platform)
            .collect()
    }
}

/// Query every catalog platform in order. Per-platform failures are logged
/// and recorded as absent; only an interrupt aborts the round.
pub fn fetch_round(source: &dyn ReleaseSource, catalog: &PlatformCatalog) -> Result<FetchRound> {
    let mut round = FetchRound::default();

    for (family, platform) in catalog.iter() {
        if ui::is_interrupted() {
            return Err(LinksError::Interrupted);
        }

        let result = match source.download_url(platform) {
            Ok(url) => {
                let version = extract_version(&url);
                ui::debug(&format!("{} -> {} ({})", platform, url, version));
                Some(FetchResult { url, version })
            }
            Err(e) => {
                ui::warning(&format!("Failed to fetch download URL for {}: {}", platform, e));
                None
            }
        };

        round.platforms.push(PlatformFetch {
            family,
            platform: platform.to_string(),
            result,
        });
    }

    Ok(round)
}

#[cfg(test)]
mod tests;
