//! Main entry point for the tablebook CLI.
//!
//! This is the command-line interface for the tablebook reservation manager.
//! Without a subcommand it runs the interactive menu; the subcommands
//! (`add`, `list`, `search`, `delete`) expose the same operations for scripts.

use clap::Parser;
use tablebook_cli::cli::{Cli, Command};
use tablebook_cli::commands::ShellCommand;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _ = tablebook::init_logger(cli.verbose, cli.quiet).install();

    let global = cli.global_options();

    // Execute the command
    let result = match cli.command {
        None => ShellCommand::default().execute(&global),
        Some(Command::Shell(cmd)) => cmd.execute(&global),
        Some(Command::Add(cmd)) => cmd.execute(&global),
        Some(Command::List(cmd)) => cmd.execute(&global),
        Some(Command::Search(cmd)) => cmd.execute(&global),
        Some(Command::Delete(cmd)) => cmd.execute(&global),
        Some(Command::ShowDataDir(cmd)) => cmd.execute(&global),
        Some(Command::Completions(cmd)) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
