use crate::commands::Workspace;
use crate::error::Result;
use crate::history::types::VersionHistory;
use crate::traits::HistoryStore;
use crate::ui as output;
use colored::Colorize;

/// Options for the history command
pub struct ListOptions {
    pub limit: Option<usize>,
    pub json: bool,
}

pub fn run(options: ListOptions, workspace: &Workspace) -> Result<()> {
    if !workspace.history.exists() {
        if options.json {
            println!("{}", serde_json::to_string_pretty(&VersionHistory::default())?);
        } else {
            output::info(&format!(
                "No version history at {}",
                workspace.history.display()
            ));
        }
        return Ok(());
    }

    let mut history = workspace.store().load()?.history;
    if let Some(limit) = options.limit {
        history.truncate_to(limit);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    display_history(&history);
    Ok(())
}

fn display_history(history: &VersionHistory) {
    if history.is_empty() {
        output::info("No versions recorded yet");
        return;
    }

    output::header(&format!("Recorded versions ({})", history.len()));
    for entry in &history.versions {
        let platforms: Vec<&str> = entry.platforms.keys().map(String::as_str).collect();
        println!(
            "  {} {} {}",
            entry.version.cyan().bold(),
            entry.date.dimmed(),
            platforms.join(", ")
        );
    }
}
