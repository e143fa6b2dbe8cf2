use crate::commands::Workspace;
use crate::constants::PlatformCatalog;
use crate::error::Result;
use crate::integrity::{self, IntegrityReport};
use crate::ui as output;

/// Run the README -> history integrity check on its own.
pub fn run(workspace: &Workspace) -> Result<()> {
    let store = workspace.store();
    let _lock = store.lock()?;

    let report =
        integrity::verify_file_integrity(&store, &workspace.readme, &PlatformCatalog::standard())?;

    match report {
        IntegrityReport::Consistent { version } => {
            output::success(&format!("README and version history agree ({})", version));
        }
        IntegrityReport::Repaired { version, platforms } => {
            output::success(&format!(
                "Restored {} with {} platform link(s) from the README",
                version, platforms
            ));
        }
        IntegrityReport::Skipped(reason) => {
            output::info(&format!("Nothing verified: {}", reason));
        }
    }
    Ok(())
}
