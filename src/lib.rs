pub mod cli;
pub mod clock;
pub mod commands;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod history;
pub mod integrity;
pub mod project_identity;
pub mod readme;
pub mod traits;
pub mod ui;

use clap::Parser;
use std::process::exit;

/// Run cursor-links CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal Handling (mark cancellation; the update aborts before saving)
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    }) {
        ui::warning(&format!("Failed to install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
