//! Add command implementation.
//!
//! This module implements the `add` command, which validates and stores a
//! single reservation without entering the interactive shell.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;

/// Add a reservation.
#[derive(Args)]
pub struct AddCommand {
    /// Guest name (must be unique, ignoring case)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Reservation date (DD-MM-YYYY, today or later)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Reservation time (HH:MM, within operating hours)
    #[arg(long, value_name = "TIME")]
    pub time: String,

    /// Number of guests (positive integer)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub guests: String,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let record =
            service.add_reservation(&self.name, &self.date, &self.time, &self.guests)?;

        if !global.quiet {
            println!("Reservation added for {}.", record.name());
        }
        Ok(())
    }
}
