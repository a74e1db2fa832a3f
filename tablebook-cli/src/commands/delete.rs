//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use tablebook::Error;

/// Delete every reservation with exactly this name (case-insensitive).
#[derive(Args)]
pub struct DeleteCommand {
    /// Full guest name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    ///
    /// Prints the number of reservations removed; exits with status 1 when
    /// no reservation has the name.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        match service.delete_reservation(&self.name) {
            Ok(removed) => {
                if !global.quiet {
                    println!("Deleted {removed} reservation(s).");
                }
                Ok(())
            }
            Err(Error::NoMatch { query }) => Err(CliError::SemanticFailure(format!(
                "No reservation found with the name '{query}'."
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
