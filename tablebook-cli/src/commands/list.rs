//! List command implementation.
//!
//! This module implements the `list` command, which displays all
//! reservations sorted by date and time in various formats (table, JSON,
//! CSV, TSV).

use crate::error::CliError;
use crate::utils::{
    effective_format, load_configuration, open_service, print_listing, FormatArg, GlobalOptions,
};
use clap::Args;
use tablebook::config::OutputFormat;
use tablebook::Error;

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (default: from config, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ListCommand {
    /// Execute the list command.
    ///
    /// An empty store prints "No reservations found." in table format and
    /// an empty document in the machine-readable formats.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;
        let format = effective_format(self.format, &config);

        match service.view_reservations() {
            Ok(listing) => print_listing(&listing, format),
            Err(Error::NoReservations) if format == OutputFormat::Table => {
                println!("No reservations found.");
                Ok(())
            }
            Err(Error::NoReservations) => print_listing(&[], format),
            Err(e) => Err(e.into()),
        }
    }
}
