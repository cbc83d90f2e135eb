mod add;
mod cli;
mod error;
mod release;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Release {
            path,
            dry_run,
            verbose,
        } => release::execute(&path, dry_run, verbose),
        Commands::Add { path, entries } => add::execute(&path, entries),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
