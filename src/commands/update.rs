//! Fetch -> merge -> save -> render -> integrity check.

use crate::clock;
use crate::commands::Workspace;
use crate::constants::PlatformCatalog;
use crate::error::{LinksError, Result};
use crate::fetch::{self, FetcherConfig, HttpReleaseSource};
use crate::history::merge::{MergeAction, MergeOutcome, MergeRequest, merge_entry};
use crate::integrity::{self, IntegrityReport};
use crate::project_identity;
use crate::readme::{self, ReadmeReport};
use crate::traits::{HistoryStore, ReleaseSource};
use crate::ui as output;
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::time::{Duration, Instant};

pub struct UpdateOptions {
    /// Rewrite the latest entry even when its version is already recorded
    pub force: bool,
    pub skip_check: bool,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// History saved and README rewritten
    Updated {
        version: String,
        action: MergeAction,
        readme: ReadmeReport,
    },
    /// Latest version already recorded; nothing written
    Unchanged { version: String },
    /// No platform produced a usable version; nothing written
    NoVersionFound,
    /// History saved, README could not be written
    ReadmeFailed { version: String, reason: String },
    /// History could not be saved; the README may already show the version
    SaveFailed { version: String, reason: String },
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Dependencies of one update run.
pub struct UpdateContext<'a> {
    pub source: &'a dyn ReleaseSource,
    pub store: &'a dyn HistoryStore,
    pub readme_path: &'a Path,
    pub catalog: &'a PlatformCatalog,
}

pub fn reconcile(
    ctx: &UpdateContext<'_>,
    force: bool,
    now: DateTime<FixedOffset>,
) -> Result<UpdateOutcome> {
    output::info(&format!("Starting update check - {}", now.to_rfc3339()));

    let round = fetch::fetch_round(ctx.source, ctx.catalog)?;
    let Some(latest) = round.latest_version() else {
        output::error("Failed to retrieve any valid version information");
        return Ok(UpdateOutcome::NoVersionFound);
    };
    output::info(&format!("Latest version detected: {}", latest));

    let mismatched = round.mismatched(&latest);
    if !mismatched.is_empty() {
        output::warning(&format!(
            "Recording {} under {} although their URLs carry a different version",
            mismatched.join(", "),
            latest
        ));
    }

    let mut history = ctx.store.load()?.history;

    let request = MergeRequest {
        version: latest.clone(),
        date: clock::format_date(&now),
        platforms: round.platform_urls(),
        force,
    };
    let action = match merge_entry(&mut history, request) {
        MergeOutcome::AlreadyRecorded { version } => {
            output::info(&format!(
                "Version {} already exists in version history, no update needed",
                version
            ));
            return Ok(UpdateOutcome::Unchanged { version });
        }
        MergeOutcome::Merged(report) => report.action,
    };

    if output::is_interrupted() {
        return Err(LinksError::Interrupted);
    }

    // History is committed before the README so its durability does not
    // depend on the README write.
    let save_error = match ctx.store.save(&history) {
        Ok(report) => {
            output::debug(&format!(
                "Saved {} entries to {}",
                report.entries,
                report.path.display()
            ));
            None
        }
        Err(e) => {
            output::error(&format!("Failed to save version history: {}", e));
            Some(e.to_string())
        }
    };

    let timestamp = clock::format_timestamp(&now);
    let rendered = readme::update_readme(ctx.readme_path, &history, ctx.catalog, &timestamp);

    if let Some(reason) = save_error {
        if let Err(e) = &rendered {
            output::error(&format!("Failed to update README: {}", e));
        }
        return Ok(UpdateOutcome::SaveFailed {
            version: latest,
            reason,
        });
    }

    match rendered {
        Ok(report) => {
            output::success(&format!(
                "{} updated with the latest Cursor version",
                ctx.readme_path.display()
            ));
            Ok(UpdateOutcome::Updated {
                version: latest,
                action,
                readme: report,
            })
        }
        Err(e) => {
            output::error(&format!("Failed to update README: {}", e));
            Ok(UpdateOutcome::ReadmeFailed {
                version: latest,
                reason: e.to_string(),
            })
        }
    }
}

pub fn run(options: UpdateOptions, workspace: &Workspace) -> Result<()> {
    let store = workspace.store();
    let lock = store.lock()?;
    output::debug(&format!("Holding run lock {}", lock.path().display()));

    let catalog = PlatformCatalog::standard();
    let source = HttpReleaseSource::new(FetcherConfig::with_timeout(options.timeout))?;
    output::debug(&format!(
        "Querying {} platforms at {}",
        catalog.len(),
        source.config().api_base
    ));

    output::header(project_identity::DISPLAY_NAME);
    let started = Instant::now();

    let ctx = UpdateContext {
        source: &source,
        store: &store,
        readme_path: &workspace.readme,
        catalog: &catalog,
    };
    let outcome = reconcile(&ctx, options.force, clock::now())?;
    let elapsed = started.elapsed().as_millis();

    output::separator();
    match &outcome {
        UpdateOutcome::Updated { version, action, .. } => {
            output::keyval("Version", version);
            output::keyval(
                "History",
                match action {
                    MergeAction::Appended => "appended",
                    MergeAction::Replaced => "replaced",
                },
            );
            output::success(&format!(
                "Update completed in {}ms. New version found.",
                elapsed
            ));
        }
        UpdateOutcome::ReadmeFailed { version, reason } => {
            output::keyval("Version", version);
            output::warning(&format!(
                "Update completed in {}ms, but the README was not written: {}",
                elapsed, reason
            ));
        }
        UpdateOutcome::SaveFailed { version, reason } => {
            output::keyval("Version", version);
            output::warning(&format!(
                "Update completed in {}ms, but the version history was not saved: {}",
                elapsed, reason
            ));
        }
        UpdateOutcome::Unchanged { .. } | UpdateOutcome::NoVersionFound => {
            output::info(&format!(
                "Update completed in {}ms. No new version found.",
                elapsed
            ));
        }
    }

    if !options.skip_check {
        report_integrity(integrity::verify_file_integrity(
            &store,
            &workspace.readme,
            &catalog,
        ));
    }

    Ok(())
}

pub(crate) fn report_integrity(result: Result<IntegrityReport>) {
    match result {
        Ok(IntegrityReport::Consistent { version }) => {
            output::debug(&format!("Integrity check passed ({})", version));
        }
        Ok(IntegrityReport::Repaired { version, platforms }) => {
            output::info(&format!(
                "Integrity check restored {} ({} links) from the README",
                version, platforms
            ));
        }
        Ok(IntegrityReport::Skipped(_)) => {}
        Err(e) => output::error(&format!("Error while verifying file integrity: {}", e)),
    }
}

#[cfg(test)]
mod tests;
