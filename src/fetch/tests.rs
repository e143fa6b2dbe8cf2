use super::client::parse_download_url;
use super::*;
use std::collections::HashMap;

struct CannedSource {
    urls: HashMap<&'static str, &'static str>,
}

impl ReleaseSource for CannedSource {
    fn download_url(&self, platform: &str) -> Result<String> {
        self.urls
            .get(platform)
            .map(|url| url.to_string())
            .ok_or_else(|| LinksError::HttpStatus {
                platform: platform.to_string(),
                status: 404,
            })
    }
}

#[test]
fn windows_installer_name_wins() {
    assert_eq!(
        extract_version("https://dl/production/abc/win32/x64/user-setup/CursorUserSetup-x64-1.2.3.exe"),
        "1.2.3"
    );
}

#[test]
fn generic_triple_fallback() {
    assert_eq!(
        extract_version("https://dl/production/client/linux/x64/appimage/Cursor-0.48.7-x86_64.AppImage"),
        "0.48.7"
    );
}

#[test]
fn no_version_is_unknown() {
    assert_eq!(extract_version("https://dl/latest/mac/universal"), "Unknown");
    assert!(!is_known(&extract_version("https://dl/latest")));
}

#[test]
fn response_body_parsing() {
    assert_eq!(
        parse_download_url("linux-x64", r#"{"downloadUrl":"https://dl/Cursor-1.0.0.AppImage"}"#)
            .unwrap(),
        "https://dl/Cursor-1.0.0.AppImage"
    );
    assert!(parse_download_url("linux-x64", "not-json").is_err());
    assert!(parse_download_url("linux-x64", r#"{"other":1}"#).is_err());
    assert!(parse_download_url("linux-x64", r#"{"downloadUrl":""}"#).is_err());
}

#[test]
fn endpoint_template() {
    let config = FetcherConfig::default();
    assert_eq!(
        config.endpoint("darwin-arm64"),
        "https://www.cursor.com/api/download?platform=darwin-arm64&releaseTrack=latest"
    );
}

#[test]
fn round_keeps_partial_results() {
    let source = CannedSource {
        urls: HashMap::from([
            ("win32-x64", "https://dl/CursorUserSetup-x64-1.2.3.exe"),
            ("darwin-arm64", "https://dl/darwin/arm64/Cursor-darwin-arm64-1.2.2.zip"),
        ]),
    };

    let round = fetch_round(&source, &PlatformCatalog::standard()).unwrap();
    assert_eq!(round.platforms.len(), 7);
    assert_eq!(round.success_count(), 2);
    assert_eq!(round.latest_version().as_deref(), Some("1.2.3"));
    assert_eq!(round.mismatched("1.2.3"), vec!["darwin-arm64"]);

    let urls = round.platform_urls();
    assert_eq!(urls.len(), 2);
    assert!(urls.contains_key("darwin-arm64"));
}

#[test]
fn latest_version_uses_string_order() {
    let round = FetchRound {
        platforms: vec![
            PlatformFetch {
                family: OsFamily::Mac,
                platform: "darwin-x64".to_string(),
                result: Some(FetchResult {
                    url: "u1".to_string(),
                    version: "1.10.0".to_string(),
                }),
            },
            PlatformFetch {
                family: OsFamily::Linux,
                platform: "linux-x64".to_string(),
                result: Some(FetchResult {
                    url: "u2".to_string(),
                    version: "1.9.0".to_string(),
                }),
            },
        ],
    };
    assert_eq!(round.latest_version().as_deref(), Some("1.9.0"));
}

#[test]
fn unknown_only_round_has_no_latest() {
    let source = CannedSource {
        urls: HashMap::from([("linux-x64", "https://dl/latest/linux")]),
    };
    let round = fetch_round(&source, &PlatformCatalog::standard()).unwrap();
    assert_eq!(round.success_count(), 1);
    assert!(round.latest_version().is_none());
    // URL is still collected for whichever version ends up chosen
    assert_eq!(round.platform_urls().len(), 1);
}
