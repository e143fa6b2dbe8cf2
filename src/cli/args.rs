use crate::constants::{HISTORY_FILE_NAME, HTTP_TIMEOUT_SECS, README_FILE_NAME};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cursor-links",
    about = "Track Cursor releases in version-history.json and the README download table",
    long_about = "Cursor release tracker - fetches the latest download links per platform, \
                  records them in version-history.json and keeps the README download table in sync",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Version history document
    #[arg(long, global = true, value_name = "PATH", default_value = HISTORY_FILE_NAME)]
    pub history: PathBuf,

    /// README carrying the download table
    #[arg(long, global = true, value_name = "PATH", default_value = README_FILE_NAME)]
    pub readme: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the latest download links and update history and README
    Update {
        /// Rewrite the latest entry even if its version is already recorded
        #[arg(short = 'f', long)]
        force: bool,

        /// Per-request timeout for the download API
        #[arg(long, value_name = "SECS", default_value_t = HTTP_TIMEOUT_SECS)]
        timeout: u64,

        /// Do not run the integrity check afterwards
        #[arg(long)]
        skip_check: bool,
    },

    /// Regenerate the README table from the saved history
    Render,

    /// Restore history entries that only the README still shows
    Check,

    /// List recorded versions
    History {
        /// Show only the newest N versions
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Print the history document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
