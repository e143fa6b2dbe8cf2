// Download API client against a local mock server
use cursor_links::error::LinksError;
use cursor_links::fetch::{FetcherConfig, HttpReleaseSource};
use cursor_links::traits::ReleaseSource;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WIN_URL: &str = "https://dl/CursorUserSetup-x64-1.2.3.exe";

fn config_for(server: &MockServer) -> FetcherConfig {
    FetcherConfig {
        api_base: format!("{}/api/download", server.uri()),
        release_track: "latest".to_string(),
        timeout: Duration::from_secs(5),
    }
}

// The blocking client owns its own runtime, so it is built, used and dropped
// off the async worker threads.
async fn fetch(config: FetcherConfig, platform: &'static str) -> Result<String, LinksError> {
    tokio::task::spawn_blocking(move || {
        HttpReleaseSource::new(config)?.download_url(platform)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_headers_and_reads_download_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .and(query_param("platform", "win32-x64"))
        .and(query_param("releaseTrack", "latest"))
        .and(header("User-Agent", "Cursor-Version-Checker"))
        .and(header("Cache-Control", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "downloadUrl": WIN_URL })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = fetch(config_for(&server), "win32-x64").await.expect("download url");
    assert_eq!(url, WIN_URL);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch(config_for(&server), "linux-arm64")
        .await
        .expect_err("503 must fail");
    match err {
        LinksError::HttpStatus { platform, status } => {
            assert_eq!(platform, "linux-arm64");
            assert_eq!(status, 503);
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn body_without_download_url_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "version": "1.2.3" })))
        .mount(&server)
        .await;

    let err = fetch(config_for(&server), "darwin-arm64")
        .await
        .expect_err("missing downloadUrl must fail");
    assert!(matches!(err, LinksError::RemoteFetchError(_)));
}
