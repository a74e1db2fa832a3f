#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for managing a single restaurant's table reservations.
//!
//! Reservations (name, date, time, party size) are kept in a spreadsheet-like
//! table store. The library loads the table once, validates new bookings,
//! and rewrites the whole table after every change.
//!
//! ## Core Types
//!
//! - [`ReservationRecord`] and [`NewReservation`]: one booking, loaded or new
//! - [`ReservationCollection`]: all bookings and the store grid boundary
//! - [`ReservationService`]: add, view, search and delete
//! - [`store::TableStore`]: the row-oriented store contract and its backends
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::store::MemoryStore;
//! use tablebook::{Error, FixedClock, ReservationService};
//!
//! let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let mut service = ReservationService::open(MemoryStore::new())
//!     .unwrap()
//!     .with_clock(FixedClock(today));
//!
//! service.add_reservation("Alice", "02-01-2030", "19:30", "4").unwrap();
//! service.add_reservation("Natalia", "01-01-2030", "12:00", "2").unwrap();
//!
//! let found = service.search_reservations("ali").unwrap();
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].record.name(), "Natalia");
//!
//! assert_eq!(service.delete_reservation("alice").unwrap(), 1);
//! assert!(matches!(service.delete_reservation("alice"), Err(Error::NoMatch { .. })));
//! ```

pub mod clock;
pub mod collection;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod output;
pub mod record;
pub mod service;
pub mod store;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::ReservationCollection;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use record::{FieldError, NewReservation, OperatingHours, ReservationRecord};
pub use service::{IndexedReservation, ReservationService};
