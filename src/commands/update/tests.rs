use super::*;
use crate::history::io::JsonHistoryStore;
use crate::history::types::VersionHistory;
use chrono::TimeZone;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const WIN_URL: &str = "https://dl/CursorUserSetup-x64-1.2.3.exe";
const MAC_URL: &str = "https://dl/darwin/arm64/Cursor-darwin-arm64-1.2.3.zip";

struct StubSource {
    urls: HashMap<String, String>,
}

impl StubSource {
    fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            urls: pairs
                .iter()
                .map(|(p, u)| (p.to_string(), u.to_string()))
                .collect(),
        }
    }
}

impl ReleaseSource for StubSource {
    fn download_url(&self, platform: &str) -> Result<String> {
        self.urls
            .get(platform)
            .cloned()
            .ok_or_else(|| LinksError::RemoteFetchError(format!("{}: timed out", platform)))
    }
}

struct Fixture {
    _dir: TempDir,
    store: JsonHistoryStore,
    readme: PathBuf,
    catalog: PlatformCatalog,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("tempdir");
        let store = JsonHistoryStore::new(dir.path().join("version-history.json"));
        let readme = dir.path().join("README.md");
        fs::write(
            &readme,
            "# Cursor downloads\n\n脚本最后更新: `2020-01-01 00:00:00`\n",
        )
        .expect("write readme");
        Self {
            _dir: dir,
            store,
            readme,
            catalog: PlatformCatalog::standard(),
        }
    }

    fn run(&self, source: &StubSource, force: bool) -> UpdateOutcome {
        let ctx = UpdateContext {
            source,
            store: &self.store,
            readme_path: &self.readme,
            catalog: &self.catalog,
        };
        reconcile(&ctx, force, noon()).expect("reconcile")
    }

    fn history(&self) -> VersionHistory {
        self.store.load().expect("load").history
    }

    fn readme(&self) -> String {
        fs::read_to_string(&self.readme).expect("read readme")
    }
}

fn noon() -> DateTime<FixedOffset> {
    clock::offset()
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid time")
}

#[test]
fn first_run_appends_entry_and_renders_row() {
    let fx = Fixture::new();
    let outcome = fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);

    let UpdateOutcome::Updated { version, action, readme } = outcome else {
        panic!("expected update, got {:?}", outcome);
    };
    assert_eq!(version, "1.2.3");
    assert_eq!(action, MergeAction::Appended);
    assert_eq!(readme.placement, readme::TablePlacement::Appended);

    let history = fx.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.versions[0].date, "2025-06-01");
    assert_eq!(
        history.versions[0].platforms.get("win32-x64").map(String::as_str),
        Some(WIN_URL)
    );

    let content = fx.readme();
    assert!(content.contains(&format!(
        "| 1.2.3 | 2025-06-01 |  | [win32-x64]({}) | Not Ready |",
        WIN_URL
    )));
    assert!(content.contains("脚本最后更新: `2025-06-01 12:00:00`"));
}

#[test]
fn second_run_without_force_changes_nothing() {
    let fx = Fixture::new();
    let source = StubSource::new(&[("win32-x64", WIN_URL)]);
    fx.run(&source, false);

    let history_before = fs::read(fx.store.path()).expect("read history");
    let readme_before = fx.readme();

    let outcome = fx.run(&source, false);
    assert_eq!(
        outcome,
        UpdateOutcome::Unchanged {
            version: "1.2.3".to_string()
        }
    );
    assert!(!outcome.is_success());
    assert_eq!(fs::read(fx.store.path()).expect("read history"), history_before);
    assert_eq!(fx.readme(), readme_before);
}

#[test]
fn forced_run_replaces_recorded_entry() {
    let fx = Fixture::new();
    fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);

    let outcome = fx.run(
        &StubSource::new(&[("win32-x64", WIN_URL), ("darwin-arm64", MAC_URL)]),
        true,
    );
    let UpdateOutcome::Updated { action, readme, .. } = outcome else {
        panic!("expected update");
    };
    assert_eq!(action, MergeAction::Replaced);
    assert_eq!(readme.placement, readme::TablePlacement::Replaced);

    let history = fx.history();
    assert_eq!(history.len(), 1);
    let entry = &history.versions[0];
    assert_eq!(entry.platforms.len(), 2);
    assert_eq!(
        entry.platforms.get("darwin-arm64").map(String::as_str),
        Some(MAC_URL)
    );
    assert!(fx.readme().contains(&format!("[darwin-arm64]({})", MAC_URL)));
}

#[test]
fn corrupted_history_is_rebuilt_from_current_run() {
    let fx = Fixture::new();
    fs::write(fx.store.path(), "{\"versions\": [oops").expect("corrupt history");

    fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);

    let raw = fs::read_to_string(fx.store.path()).expect("read history");
    let history: VersionHistory = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(history.len(), 1);
    assert_eq!(history.versions[0].version, "1.2.3");
}

#[test]
fn no_usable_version_writes_nothing() {
    let fx = Fixture::new();
    let readme_before = fx.readme();

    let outcome = fx.run(&StubSource::new(&[("linux-x64", "https://dl/latest/linux")]), false);
    assert_eq!(outcome, UpdateOutcome::NoVersionFound);
    assert!(!fx.store.path().exists());
    assert_eq!(fx.readme(), readme_before);
}

#[test]
fn missing_readme_fails_after_history_is_saved() {
    let fx = Fixture::new();
    fs::remove_file(&fx.readme).expect("remove readme");

    let outcome = fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);
    assert!(matches!(outcome, UpdateOutcome::ReadmeFailed { .. }));
    assert!(fx.history().contains("1.2.3"));
}

#[test]
fn newer_version_goes_to_the_top() {
    let fx = Fixture::new();
    fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);
    fx.run(
        &StubSource::new(&[("win32-x64", "https://dl/CursorUserSetup-x64-1.3.0.exe")]),
        false,
    );

    let history = fx.history();
    let versions: Vec<&str> = history.versions.iter().map(|e| e.version.as_str()).collect();
    assert_eq!(versions, vec!["1.3.0", "1.2.3"]);

    let content = fx.readme();
    let newer = content.find("| 1.3.0 |").expect("1.3.0 row");
    let older = content.find("| 1.2.3 |").expect("1.2.3 row");
    assert!(newer < older);
    assert_eq!(content.matches("| Version | Date |").count(), 1);
}

#[test]
fn blank_version_entry_does_not_block_the_update() {
    let fx = Fixture::new();
    fs::write(
        fx.store.path(),
        r#"{"versions":[{"version":"","date":"2025-01-01"},{"version":"1.0.0","date":"2025-01-01"}]}"#,
    )
    .expect("seed history");

    let outcome = fx.run(&StubSource::new(&[("win32-x64", WIN_URL)]), false);
    assert!(outcome.is_success(), "got {:?}", outcome);

    let versions: Vec<String> = fx.history().versions.into_iter().map(|e| e.version).collect();
    assert_eq!(versions, vec!["1.2.3", "1.0.0"]);
    assert!(fx.readme().contains("| 1.2.3 | 2025-06-01 |"));
}

struct ReadOnlyStore;

impl HistoryStore for ReadOnlyStore {
    fn load(&self) -> Result<crate::history::io::LoadedHistory> {
        Ok(crate::history::io::LoadedHistory::fresh(
            crate::history::io::HistoryOrigin::Missing,
        ))
    }

    fn save(&self, _history: &VersionHistory) -> Result<crate::history::io::SaveReport> {
        Err(LinksError::Other("disk is read-only".to_string()))
    }
}

#[test]
fn failed_save_is_not_reported_as_updated() {
    let fx = Fixture::new();
    let source = StubSource::new(&[("win32-x64", WIN_URL)]);
    let ctx = UpdateContext {
        source: &source,
        store: &ReadOnlyStore,
        readme_path: &fx.readme,
        catalog: &fx.catalog,
    };

    let outcome = reconcile(&ctx, false, noon()).expect("reconcile");
    assert_eq!(
        outcome,
        UpdateOutcome::SaveFailed {
            version: "1.2.3".to_string(),
            reason: "disk is read-only".to_string()
        }
    );
    assert!(!outcome.is_success());
}
