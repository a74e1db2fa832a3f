//! Reservation service: the four user-facing operations.
//!
//! The service owns the collection for the lifetime of a run. It is built
//! from an already-opened [`TableStore`], loads every row once, and rewrites
//! the whole table after each add or delete. Concurrent edits made to the
//! store by anyone else are overwritten by the next save.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use crate::clock::{Clock, SystemClock};
use crate::collection::ReservationCollection;
use crate::error::{Error, Result};
use crate::record::{
    parse_date, parse_guest_count, parse_time, validate_guest_count, validate_new_date,
    validate_new_time, NewReservation, OperatingHours, ReservationRecord,
};
use crate::store::{CellRef, TableStore};

/// A record together with its 1-based position in a sorted listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedReservation {
    /// Display index, assigned after sorting.
    pub index: usize,
    /// The reservation.
    pub record: ReservationRecord,
}

/// Add, view, search and delete reservations against a table store.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::store::MemoryStore;
/// use tablebook::{FixedClock, ReservationService};
///
/// let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// let mut service = ReservationService::open(MemoryStore::new())
///     .unwrap()
///     .with_clock(FixedClock(today));
///
/// service.add_reservation("Alice", "02-01-2030", "12:00", "2").unwrap();
/// let listing = service.view_reservations().unwrap();
/// assert_eq!(listing[0].index, 1);
/// assert_eq!(listing[0].record.name(), "Alice");
/// ```
pub struct ReservationService<S: TableStore> {
    store: S,
    collection: ReservationCollection,
    clock: Box<dyn Clock>,
    hours: OperatingHours,
}

impl<S: TableStore> ReservationService<S> {
    /// Loads every row from `store` and builds the service around it.
    ///
    /// Uses the system clock and the default operating hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the store cannot be read.
    pub fn open(store: S) -> Result<Self> {
        let rows = store.read_all()?;
        let collection = ReservationCollection::load(&rows);
        log::info!("loaded {} reservation(s)", collection.len());
        Ok(Self {
            store,
            collection,
            clock: Box::new(SystemClock),
            hours: OperatingHours::default(),
        })
    }

    /// Replaces the clock used to decide what "today" is.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the operating hours new reservations must fall within.
    #[must_use]
    pub fn with_hours(mut self, hours: OperatingHours) -> Self {
        self.hours = hours;
        self
    }

    /// Returns the in-memory collection.
    #[must_use]
    pub const fn collection(&self) -> &ReservationCollection {
        &self.collection
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the operating hours in force.
    #[must_use]
    pub const fn hours(&self) -> &OperatingHours {
        &self.hours
    }

    /// Returns today's date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Checks a name for a new reservation, returning it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for a blank name and
    /// [`Error::DuplicateName`] if the name is taken (ignoring case).
    pub fn check_name(&self, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "name must not be empty".into(),
            });
        }
        if self.collection.contains_name(trimmed) {
            return Err(Error::DuplicateName {
                name: trimmed.to_string(),
            });
        }
        Ok(trimmed.to_string())
    }

    /// Parses a `DD-MM-YYYY` date and checks it is not in the past.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] with the underlying reason.
    pub fn check_date(&self, text: &str) -> Result<NaiveDate> {
        let date = parse_date(text).map_err(Error::InvalidDate)?;
        validate_new_date(date, self.today()).map_err(Error::InvalidDate)?;
        Ok(date)
    }

    /// Parses an `HH:MM` time and checks it is within operating hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] with the underlying reason.
    pub fn check_time(&self, text: &str) -> Result<NaiveTime> {
        let time = parse_time(text).map_err(Error::InvalidTime)?;
        validate_new_time(time, &self.hours).map_err(Error::InvalidTime)?;
        Ok(time)
    }

    /// Parses a guest count and checks it is positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGuestCount`] with the underlying reason.
    pub fn check_guest_count(&self, text: &str) -> Result<u32> {
        parse_guest_count(text).map_err(Error::InvalidGuestCount)
    }

    /// Validates text input and adds a reservation.
    ///
    /// Fields are checked in the order name, date, time, guests; the first
    /// failure is returned and nothing is changed.
    ///
    /// # Errors
    ///
    /// Returns the first field error, or [`Error::StoreUnavailable`] if the
    /// save fails. A failed save leaves the record in memory.
    pub fn add_reservation(
        &mut self,
        name: &str,
        date: &str,
        time: &str,
        guests: &str,
    ) -> Result<ReservationRecord> {
        let draft = NewReservation {
            name: self.check_name(name)?,
            date: self.check_date(date)?,
            time: self.check_time(time)?,
            guest_count: self.check_guest_count(guests)?,
        };
        self.add(draft)
    }

    /// Adds a typed reservation after re-checking every rule.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, or [`Error::StoreUnavailable`] if the
    /// save fails.
    pub fn add(&mut self, draft: NewReservation) -> Result<ReservationRecord> {
        let name = self.check_name(&draft.name)?;
        validate_new_date(draft.date, self.today()).map_err(Error::InvalidDate)?;
        validate_new_time(draft.time, &self.hours).map_err(Error::InvalidTime)?;
        validate_guest_count(i64::from(draft.guest_count)).map_err(Error::InvalidGuestCount)?;

        let record = ReservationRecord::from(NewReservation { name, ..draft });
        self.collection.add(record.clone());
        self.save()?;

        log::info!("added reservation for '{}'", record.name());
        Ok(record)
    }

    /// Lists all reservations sorted by date then time.
    ///
    /// Records with a missing date or time sort after all valid values;
    /// ties keep their stored order. Indices start at 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoReservations`] if the collection is empty.
    pub fn view_reservations(&self) -> Result<Vec<IndexedReservation>> {
        if self.collection.is_empty() {
            return Err(Error::NoReservations);
        }
        Ok(sorted_listing(self.collection.records().iter()))
    }

    /// Finds reservations whose name contains `query`, ignoring case.
    ///
    /// Results are sorted and indexed like [`view_reservations`](Self::view_reservations).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] if nothing matches.
    pub fn search_reservations(&self, query: &str) -> Result<Vec<IndexedReservation>> {
        let query = query.trim();
        let matches: Vec<_> = self
            .collection
            .records()
            .iter()
            .filter(|r| r.name_contains(query))
            .collect();

        if matches.is_empty() {
            return Err(Error::NoMatch {
                query: query.to_string(),
            });
        }
        Ok(sorted_listing(matches.into_iter()))
    }

    /// Deletes every reservation whose name equals `name`, ignoring case.
    ///
    /// Matching is exact, unlike search. All matches go, so duplicates that
    /// entered the store by hand are removed together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] if nothing matches (the store is not
    /// touched), or [`Error::StoreUnavailable`] if the save fails.
    pub fn delete_reservation(&mut self, name: &str) -> Result<usize> {
        let name = name.trim();
        let removed = self.collection.remove_where(|r| r.name_matches(name));
        if removed == 0 {
            return Err(Error::NoMatch {
                query: name.to_string(),
            });
        }

        self.save()?;
        log::info!("deleted {removed} reservation(s) named '{name}'");
        Ok(removed)
    }

    /// Rewrites the whole store from the collection.
    fn save(&mut self) -> Result<()> {
        let grid = self.collection.serialize();
        self.store.clear()?;
        self.store.write_from(CellRef::ORIGIN, &grid)?;
        log::debug!("saved {} row(s) to store", grid.len());
        Ok(())
    }
}

/// Orders records with missing dates or times after all valid ones.
fn chronological(a: &ReservationRecord, b: &ReservationRecord) -> Ordering {
    let key = |r: &ReservationRecord| (r.date().is_none(), r.date(), r.time().is_none(), r.time());
    key(a).cmp(&key(b))
}

fn sorted_listing<'a>(
    records: impl Iterator<Item = &'a ReservationRecord>,
) -> Vec<IndexedReservation> {
    let mut sorted: Vec<&ReservationRecord> = records.collect();
    sorted.sort_by(|a, b| chronological(a, b));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| IndexedReservation {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}
