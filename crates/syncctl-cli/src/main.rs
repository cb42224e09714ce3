//! syncctl CLI
//!
//! Toggles syncers in the persisted active set and runs them on demand.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::SyncContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(verbose = cli.verbose, quiet = cli.quiet, "logging initialised");

    match cli.command {
        Some(cmd) => {
            let cwd = std::env::current_dir()?;
            let ctx = SyncContext::discover(cli.home.as_deref(), &cwd)?;
            tracing::debug!(home = %ctx.home(), "using syncctl home");
            execute_command(&ctx, cmd)
        }
        None => {
            println!("{} - toggle and run named syncers", "syncctl".green().bold());
            println!();
            println!("Run {} for available commands.", "syncctl --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &SyncContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { json } => commands::run_list(ctx, json),
        Commands::Enable { syncer } => commands::run_enable(ctx, &syncer).map(drop),
        Commands::Disable { syncer } => commands::run_disable(ctx, &syncer).map(drop),
        Commands::Sync {
            syncer,
            mode,
            options,
        } => {
            let options = commands::build_options(mode.as_deref(), &options);
            commands::run_sync(ctx, &syncer, &options).map(drop)
        }
    }
}
