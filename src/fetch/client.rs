use crate::error::{LinksError, Result};
use crate::project_identity;
use crate::traits::ReleaseSource;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DownloadResponse {
    #[serde(rename = "downloadUrl")]
    download_url: Option<String>,
}

/// Endpoint and request settings for the download API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub api_base: String,
    pub release_track: String,
    pub timeout: Duration,
}

impl FetcherConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn endpoint(&self, platform: &str) -> String {
        project_identity::download_api_url(&self.api_base, platform, &self.release_track)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_base: project_identity::DOWNLOAD_API_BASE.to_string(),
            release_track: project_identity::RELEASE_TRACK.to_string(),
            timeout: Duration::from_secs(crate::constants::HTTP_TIMEOUT_SECS),
        }
    }
}

/// Download API client: one bounded GET per platform.
pub struct HttpReleaseSource {
    client: Client,
    config: FetcherConfig,
}

impl HttpReleaseSource {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LinksError::RemoteFetchError(format!("HTTP client setup: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn download_url(&self, platform: &str) -> Result<String> {
        let response = self
            .client
            .get(self.config.endpoint(platform))
            .header("User-Agent", project_identity::USER_AGENT)
            .header("Cache-Control", "no-cache")
            .send()
            .map_err(|e| LinksError::RemoteFetchError(format!("{}: {}", platform, e)))?;

        if !response.status().is_success() {
            return Err(LinksError::HttpStatus {
                platform: platform.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LinksError::RemoteFetchError(format!("{}: {}", platform, e)))?;
        parse_download_url(platform, &body)
    }
}

pub(crate) fn parse_download_url(platform: &str, body: &str) -> Result<String> {
    let parsed: DownloadResponse = serde_json::from_str(body).map_err(|e| {
        LinksError::RemoteFetchError(format!("{}: invalid response body: {}", platform, e))
    })?;

    parsed
        .download_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            LinksError::RemoteFetchError(format!("{}: response has no downloadUrl", platform))
        })
}
