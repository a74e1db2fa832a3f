//! Interactive menu implementation.
//!
//! This module implements the `shell` command (also the default when no
//! subcommand is given): a numbered menu that adds, views, searches and
//! deletes reservations until the user exits or input ends.

use std::io::{self, BufRead, Write};

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use tablebook::output::{ReservationFormatter, TableFormatter};
use tablebook::store::TableStore;
use tablebook::{Error, IndexedReservation, NewReservation, ReservationService};

const MENU: &str = "\nRestaurant Reservation Manager\n\
1. Add Reservation\n\
2. View Reservations\n\
3. Search Reservations\n\
4. Delete Reservation\n\
5. Exit";

const NO_RESERVATIONS: &str = "No reservations found.";
const NO_MATCHES: &str = "No reservations found matching the criteria.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";

/// Run the interactive reservation menu.
#[derive(Args, Default)]
pub struct ShellCommand {}

impl ShellCommand {
    /// Execute the shell command against stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(&mut service, stdin.lock(), stdout.lock()).run()?;
        Ok(())
    }
}

/// Whether the menu loop should keep going.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a service, reading `input` and writing
/// prompts and results to `output`.
pub struct Shell<'a, S: TableStore, R: BufRead, W: Write> {
    service: &'a mut ReservationService<S>,
    input: R,
    output: W,
}

impl<'a, S: TableStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    /// Creates a session.
    pub fn new(service: &'a mut ReservationService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until "Exit" is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Store failures are reported to the user and the loop continues.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add()?,
                "2" => self.view()?,
                "3" => self.search()?,
                "4" => self.delete()?,
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()
    }

    /// Writes `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompts until `check` accepts the answer; `None` at end of input.
    fn ask<T>(
        &mut self,
        text: &str,
        check: impl Fn(&ReservationService<S>, &str) -> tablebook::Result<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match check(&*self.service, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", rejection_message(&e))?,
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Enter name: ", ReservationService::<S>::check_name)? else {
            return Ok(Flow::Quit);
        };
        let Some(date) = self.ask(
            "Enter reservation date (DD-MM-YYYY): ",
            ReservationService::<S>::check_date,
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(time) = self.ask(
            "Enter reservation time (HH:MM): ",
            ReservationService::<S>::check_time,
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(guest_count) = self.ask(
            "Enter number of guests: ",
            ReservationService::<S>::check_guest_count,
        )?
        else {
            return Ok(Flow::Quit);
        };

        let draft = NewReservation {
            name,
            date,
            time,
            guest_count,
        };
        match self.service.add(draft) {
            Ok(_) => writeln!(self.output, "Reservation added successfully!")?,
            Err(e) => writeln!(self.output, "{}", rejection_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> io::Result<Flow> {
        match self.service.view_reservations() {
            Ok(listing) => self.print_table(&listing)?,
            Err(Error::NoReservations) => writeln!(self.output, "{NO_RESERVATIONS}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter name to search: ")? else {
            return Ok(Flow::Quit);
        };
        match self.service.search_reservations(&query) {
            Ok(listing) => self.print_table(&listing)?,
            Err(Error::NoMatch { .. }) => writeln!(self.output, "{NO_MATCHES}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        match self.service.view_reservations() {
            Ok(listing) => self.print_table(&listing)?,
            Err(Error::NoReservations) => {
                writeln!(self.output, "{NO_RESERVATIONS}")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        }

        let Some(name) = self.prompt("Enter the name of the reservation to delete: ")? else {
            return Ok(Flow::Quit);
        };
        match self.service.delete_reservation(&name) {
            Ok(removed) => writeln!(self.output, "Deleted {removed} reservation(s).")?,
            Err(Error::NoMatch { query }) => {
                writeln!(self.output, "No reservation found with the name '{query}'.")?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn print_table(&mut self, listing: &[IndexedReservation]) -> io::Result<()> {
        match TableFormatter.format(listing) {
            Ok(table) => writeln!(self.output, "{table}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
}

/// The line shown when an entered value is rejected.
fn rejection_message(err: &Error) -> String {
    match err {
        Error::DuplicateName { .. } => {
            "A reservation with this name already exists. Please enter a different name."
                .to_string()
        }
        Error::InvalidName { reason, .. } => format!("Invalid name: {reason}."),
        Error::InvalidDate(reason) => format!("Invalid date format or past date: {reason}"),
        Error::InvalidTime(reason) => {
            format!("Invalid time format or outside operating hours: {reason}")
        }
        Error::InvalidGuestCount(reason) => format!("Invalid number: {reason}"),
        other => format!("Error: {other}"),
    }
}
