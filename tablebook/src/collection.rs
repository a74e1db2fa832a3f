//! In-memory reservation collection and its store boundary.
//!
//! The collection converts between the store's raw string grid and typed
//! [`ReservationRecord`]s. Loading is tolerant: cells that do not parse
//! become missing values instead of failing the load, and are written back
//! as empty cells.

use std::collections::BTreeMap;

use crate::record::{
    format_date, format_guest_count, format_time, parse_date, parse_guest_count, parse_time,
    ReservationRecord,
};
use crate::store::Grid;

/// Header of the name column.
pub const NAME_COLUMN: &str = "Name";
/// Header of the date column.
pub const DATE_COLUMN: &str = "Date";
/// Header of the time column.
pub const TIME_COLUMN: &str = "Time";
/// Header of the party-size column.
pub const GUESTS_COLUMN: &str = "Number of Guests";

/// The canonical column set, in the order used for a fresh store.
pub const CANONICAL_COLUMNS: [&str; 4] = [NAME_COLUMN, DATE_COLUMN, TIME_COLUMN, GUESTS_COLUMN];

/// All reservations for one program run.
///
/// # Examples
///
/// ```
/// use tablebook::ReservationCollection;
///
/// let rows = vec![
///     vec!["Name".to_string(), "Date".to_string(), "Time".to_string(), "Number of Guests".to_string()],
///     vec!["Alice".to_string(), "01-06-2030".to_string(), "19:00".to_string(), "2".to_string()],
/// ];
/// let collection = ReservationCollection::load(&rows);
/// assert_eq!(collection.len(), 1);
/// assert_eq!(collection.serialize(), rows);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationCollection {
    header: Vec<String>,
    records: Vec<ReservationRecord>,
}

impl Default for ReservationCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationCollection {
    /// Creates an empty collection with the canonical header.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: CANONICAL_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            records: Vec::new(),
        }
    }

    /// Builds a collection from the store's raw grid.
    ///
    /// The first row is the header. Canonical columns are found by name;
    /// any that are missing are appended to the header. Other columns are
    /// carried through untouched. Fully blank rows are skipped, and an
    /// empty grid gives an empty collection with the canonical header.
    #[must_use]
    pub fn load(rows: &[Vec<String>]) -> Self {
        let Some((header_row, data_rows)) = rows.split_first() else {
            return Self::new();
        };

        let mut header = header_row.clone();
        for column in CANONICAL_COLUMNS {
            if !header.iter().any(|h| h == column) {
                log::debug!("store header has no '{column}' column, appending it");
                header.push(column.to_string());
            }
        }

        let position = |column: &str| header.iter().position(|h| h == column);
        let name_idx = position(NAME_COLUMN);
        let date_idx = position(DATE_COLUMN);
        let time_idx = position(TIME_COLUMN);
        let guests_idx = position(GUESTS_COLUMN);

        let mut records = Vec::with_capacity(data_rows.len());
        for (offset, row) in data_rows.iter().enumerate() {
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| row.get(i))
                    .map_or("", String::as_str)
            };

            let row_number = offset + 2;
            let date = parse_cell(row_number, DATE_COLUMN, cell(date_idx), |s| {
                parse_date(s).ok()
            });
            let time = parse_cell(row_number, TIME_COLUMN, cell(time_idx), |s| {
                parse_time(s).ok()
            });
            let guest_count = parse_cell(row_number, GUESTS_COLUMN, cell(guests_idx), |s| {
                parse_guest_count(s).ok()
            });

            let extra: BTreeMap<String, String> = header
                .iter()
                .enumerate()
                .filter(|(_, column)| !CANONICAL_COLUMNS.contains(&column.as_str()))
                .filter_map(|(i, column)| {
                    row.get(i)
                        .filter(|value| !value.is_empty())
                        .map(|value| (column.clone(), value.clone()))
                })
                .collect();

            records.push(
                ReservationRecord::new(cell(name_idx), date, time, guest_count).with_extra(extra),
            );
        }

        log::debug!("loaded {} reservation(s) from store", records.len());
        Self { header, records }
    }

    /// Produces the store grid: header row followed by one row per record.
    ///
    /// Column order matches [`header`](Self::header). Missing values are
    /// written as empty strings.
    #[must_use]
    pub fn serialize(&self) -> Grid {
        let mut grid = Vec::with_capacity(self.records.len() + 1);
        grid.push(self.header.clone());
        for record in &self.records {
            let row = self
                .header
                .iter()
                .map(|column| match column.as_str() {
                    NAME_COLUMN => record.name().to_string(),
                    DATE_COLUMN => format_date(record.date()),
                    TIME_COLUMN => format_time(record.time()),
                    GUESTS_COLUMN => format_guest_count(record.guest_count()),
                    other => record.extra(other).unwrap_or_default().to_string(),
                })
                .collect();
            grid.push(row);
        }
        grid
    }

    /// Returns the column names in store order.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ReservationRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if any record has this name, ignoring case.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name_matches(name))
    }

    /// Appends a record.
    pub fn add(&mut self, record: ReservationRecord) {
        self.records.push(record);
    }

    /// Removes every record matching `predicate`, returning how many went.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&ReservationRecord) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        before - self.records.len()
    }
}

/// Parses one optional cell, logging (not failing) when it is unusable.
fn parse_cell<T>(
    row_number: usize,
    column: &str,
    text: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    let value = parse(text);
    if value.is_none() {
        log::warn!("row {row_number}: cannot parse {column} '{text}', keeping it empty");
    }
    value
}

#[cfg(test)]
mod proptests;
