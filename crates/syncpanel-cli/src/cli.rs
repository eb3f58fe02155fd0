use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use syncpanel_core::models::{MAX_AUTO_SYNC_INTERVAL, MIN_AUTO_SYNC_INTERVAL};

#[derive(Parser)]
#[command(name = "syncpanel")]
#[command(about = "Inspect and drive the folder sync panel from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a byte count (e.g. 1536 -> "1.5 KB")
    Size {
        /// Number of bytes
        bytes: u64,
    },
    /// Format a sync time as "HH:MM:SS (Nm ago)"
    Time {
        /// Sync time in Unix milliseconds
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,
        /// Reference time in Unix milliseconds (defaults to now)
        #[arg(long, value_name = "MS", allow_hyphen_values = true)]
        now: Option<i64>,
        /// Render the clock in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
    /// Describe how long ago a save happened (e.g. "about 2 hours ago")
    Ago {
        /// Save time in Unix milliseconds
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,
        /// Reference time in Unix milliseconds (defaults to now)
        #[arg(long, value_name = "MS", allow_hyphen_values = true)]
        now: Option<i64>,
    },
    /// Show or change sync settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Show or change the sync folder
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },
    /// Run one sync pass and print the panel
    Sync {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Keep the panel open, printing it whenever it changes
    Watch {
        /// Exit after printing this many updates
        #[arg(long, value_name = "N")]
        updates: Option<usize>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update one or more settings
    Set {
        /// Enable or disable automatic sync
        #[arg(long, value_name = "BOOL")]
        auto_sync: Option<bool>,
        /// Auto-sync interval in minutes
        #[arg(
            long,
            value_name = "MINUTES",
            value_parser = clap::value_parser!(u32).range(
                i64::from(MIN_AUTO_SYNC_INTERVAL)..=i64::from(MAX_AUTO_SYNC_INTERVAL)
            )
        )]
        interval: Option<u32>,
        /// Sync files whenever they are saved
        #[arg(long, value_name = "BOOL")]
        sync_on_save: Option<bool>,
    },
}

#[derive(Subcommand)]
pub enum FolderCommands {
    /// Select the sync folder (prompts when PATH is omitted)
    Set {
        /// Directory to sync
        path: Option<PathBuf>,
    },
    /// Print the selected sync folder
    Show,
}
