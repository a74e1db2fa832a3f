//! Build script for tablebook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tablebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant table reservations")
        .long_about(
            "Command-line tool for adding, viewing, searching and deleting restaurant \
             reservations kept in a tabular store",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Override the store backend")
                .value_parser(["sqlite", "csv"])
                .global(true),
        )
        .arg(
            Arg::new("worksheet")
                .long("worksheet")
                .help("Override the worksheet (table) name")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the SQLite busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .subcommands(vec![
            Command::new("shell")
                .about("Run the interactive reservation menu")
                .long_about("Run the numbered menu; this is the default when no command is given"),
            Command::new("add")
                .about("Add a reservation")
                .long_about("Validate and add a reservation from --name, --date, --time and --guests"),
            Command::new("list")
                .about("List all reservations")
                .long_about("Display every reservation in date and time order"),
            Command::new("search")
                .about("Search reservations by name fragment")
                .long_about("Display reservations whose name contains the query, ignoring case"),
            Command::new("delete")
                .about("Delete reservations by name")
                .long_about("Remove every reservation whose name equals the argument, ignoring case"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the tablebook data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tablebook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
