//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands::{self, Workspace};
use crate::error::Result;
use clap::CommandFactory;
use std::time::Duration;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let workspace = Workspace::new(&args.global.history, &args.global.readme);

    match &args.command {
        Some(Command::Update {
            force,
            timeout,
            skip_check,
        }) => commands::update::run(
            commands::update::UpdateOptions {
                force: *force,
                skip_check: *skip_check,
                timeout: Duration::from_secs(*timeout),
            },
            &workspace,
        ),

        Some(Command::Render) => commands::render::run(&workspace),

        Some(Command::Check) => commands::check::run(&workspace),

        Some(Command::History { limit, json }) => commands::list::run(
            commands::list::ListOptions {
                limit: *limit,
                json: *json,
            },
            &workspace,
        ),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
