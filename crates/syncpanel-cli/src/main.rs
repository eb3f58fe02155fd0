//! syncpanel CLI - the folder sync panel from the command line
//!
//! Formats sizes and sync times, manages the sync folder and settings, and
//! runs the live panel against a local directory.

mod cli;
mod commands;
mod config;
mod error;
mod picker;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::folder::run_folder;
use crate::commands::format::{run_ago, run_size, run_time};
use crate::commands::settings::run_settings;
use crate::commands::sync::run_sync;
use crate::commands::watch::run_watch;
use crate::config::ConfigPaths;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let directive = "syncpanel=info"
        .parse()
        .map_err(|error| CliError::Config(format!("invalid log directive: {error}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Size { bytes } => run_size(bytes),
        Commands::Time {
            timestamp,
            now,
            utc,
        } => run_time(timestamp, now, utc),
        Commands::Ago { timestamp, now } => run_ago(timestamp, now),
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
        Commands::Settings { command } => {
            run_settings(command, &ConfigPaths::resolve(cli.config)?)?;
        }
        Commands::Folder { command } => {
            run_folder(command, &ConfigPaths::resolve(cli.config)?).await?;
        }
        Commands::Sync { json } => run_sync(json, &ConfigPaths::resolve(cli.config)?).await?,
        Commands::Watch { updates, json } => {
            run_watch(updates, json, &ConfigPaths::resolve(cli.config)?).await?;
        }
    }

    Ok(())
}
