//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `shell`: Interactive menu (the default when no command is given)
//! - `add`: Add a reservation
//! - `list`: List all reservations
//! - `search`: Search reservations by name fragment
//! - `delete`: Delete reservations by name
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod delete;
pub mod list;
pub mod search;
pub mod shell;
pub mod show_data_dir;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use search::SearchCommand;
pub use shell::ShellCommand;
pub use show_data_dir::ShowDataDirCommand;
