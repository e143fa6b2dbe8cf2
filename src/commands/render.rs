use crate::clock;
use crate::commands::Workspace;
use crate::constants::PlatformCatalog;
use crate::error::{LinksError, Result};
use crate::history::io::HistoryOrigin;
use crate::project_identity;
use crate::readme::{self, TablePlacement};
use crate::traits::HistoryStore;
use crate::ui as output;

/// Regenerate the README table from the saved history, without fetching.
pub fn run(workspace: &Workspace) -> Result<()> {
    let store = workspace.store();
    let _lock = store.lock()?;

    let loaded = store.load()?;
    match &loaded.origin {
        HistoryOrigin::Existing | HistoryOrigin::Empty => {}
        HistoryOrigin::Missing | HistoryOrigin::Corrupted(_) => {
            return Err(LinksError::Other(format!(
                "Refusing to render from an unusable history at {}.\n\
                 Hint: run `{}` to rebuild it.",
                workspace.history.display(),
                project_identity::cli_with("update")
            )));
        }
    }

    let catalog = PlatformCatalog::standard();
    let timestamp = clock::format_timestamp(&clock::now());
    let report = readme::update_readme(&workspace.readme, &loaded.history, &catalog, &timestamp)?;

    let placement = match report.placement {
        TablePlacement::Replaced => "replaced",
        TablePlacement::Appended => "appended",
    };
    output::success(&format!(
        "Download table {} in {} ({} rows)",
        placement,
        workspace.readme.display(),
        report.rows
    ));
    if report.stamps == 0 {
        output::debug("No \"last updated\" marker found");
    }
    Ok(())
}
