//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CompletionsCommand, DeleteCommand, ListCommand, SearchCommand, ShellCommand,
    ShowDataDirCommand,
};
use crate::utils::{GlobalOptions, StoreArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the store backend
    #[arg(long, value_enum, global = true)]
    pub store: Option<StoreArg>,

    /// Override the worksheet (table) name
    #[arg(long, value_name = "NAME", global = true)]
    pub worksheet: Option<String>,

    /// Override the SQLite busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Command to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Collect the global flags into the options every command receives.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            store: self.store,
            worksheet: self.worksheet.clone(),
            busy_timeout: self.busy_timeout,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive reservation menu
    Shell(ShellCommand),

    /// Add a reservation
    Add(AddCommand),

    /// List all reservations
    List(ListCommand),

    /// Search reservations by name fragment
    Search(SearchCommand),

    /// Delete reservations by name
    Delete(DeleteCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
