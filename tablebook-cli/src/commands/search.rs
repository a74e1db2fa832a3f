//! Search command implementation.

use crate::error::CliError;
use crate::utils::{
    effective_format, load_configuration, open_service, print_listing, FormatArg, GlobalOptions,
};
use clap::Args;
use tablebook::Error;

/// Find reservations whose name contains a fragment (case-insensitive).
#[derive(Args)]
pub struct SearchCommand {
    /// Name fragment to look for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output format (default: from config, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl SearchCommand {
    /// Execute the search command.
    ///
    /// Exits with status 1 when nothing matches.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        match service.search_reservations(&self.query) {
            Ok(listing) => print_listing(&listing, effective_format(self.format, &config)),
            Err(Error::NoMatch { .. }) => Err(CliError::SemanticFailure(
                "No reservations found matching the criteria.".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}
