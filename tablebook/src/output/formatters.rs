//! Output formatter implementations.

use serde::Serialize;

use crate::collection::{DATE_COLUMN, GUESTS_COLUMN, NAME_COLUMN, TIME_COLUMN};
use crate::record::{format_date, format_guest_count, format_time};
use crate::service::IndexedReservation;
use crate::{Error, Result};

use super::ReservationFormatter;

/// Column headers of a listing, in display order.
pub const LISTING_COLUMNS: [&str; 5] = ["Index", NAME_COLUMN, DATE_COLUMN, TIME_COLUMN, GUESTS_COLUMN];

/// Gap between table columns.
const COLUMN_GAP: &str = "  ";

fn listing_row(entry: &IndexedReservation) -> [String; 5] {
    let record = &entry.record;
    [
        entry.index.to_string(),
        record.name().to_string(),
        format_date(record.date()),
        format_time(record.time()),
        format_guest_count(record.guest_count()),
    ]
}

/// Formatter for a human-readable table.
///
/// Every column is right-aligned to its widest cell, header included.
pub struct TableFormatter;

impl ReservationFormatter for TableFormatter {
    fn format(&self, listing: &[IndexedReservation]) -> Result<String> {
        let rows: Vec<[String; 5]> = listing.iter().map(listing_row).collect();

        let mut widths = LISTING_COLUMNS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: &[&str]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(render(&LISTING_COLUMNS));
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(render(&cells));
        }
        Ok(lines.join("\n"))
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    index: usize,
    name: &'a str,
    date: Option<String>,
    time: Option<String>,
    guests: Option<u32>,
}

/// Formatter for JSON output.
///
/// Missing dates, times and guest counts are written as `null`.
pub struct JsonFormatter;

impl ReservationFormatter for JsonFormatter {
    fn format(&self, listing: &[IndexedReservation]) -> Result<String> {
        let entries: Vec<JsonEntry<'_>> = listing
            .iter()
            .map(|entry| JsonEntry {
                index: entry.index,
                name: entry.record.name(),
                date: entry.record.date().map(|d| format_date(Some(d))),
                time: entry.record.time().map(|t| format_time(Some(t))),
                guests: entry.record.guest_count(),
            })
            .collect();

        serde_json::to_string_pretty(&entries).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for delimited output (CSV or TSV).
pub struct DelimitedFormatter {
    delimiter: u8,
}

impl DelimitedFormatter {
    /// Create a formatter using `delimiter` between fields.
    #[must_use]
    pub const fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl ReservationFormatter for DelimitedFormatter {
    fn format(&self, listing: &[IndexedReservation]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(LISTING_COLUMNS).map_err(csv_error)?;
        for entry in listing {
            writer.write_record(listing_row(entry)).map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        let text = String::from_utf8(bytes).map_err(|e| Error::Validation {
            field: "delimited_output".to_string(),
            message: format!("output is not valid UTF-8: {e}"),
        })?;
        Ok(text.trim_end_matches('\n').to_string())
    }
}

fn csv_error(e: csv::Error) -> Error {
    Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ReservationRecord;
    use chrono::{NaiveDate, NaiveTime};

    fn listing() -> Vec<IndexedReservation> {
        vec![
            IndexedReservation {
                index: 1,
                record: ReservationRecord::new(
                    "Alice",
                    NaiveDate::from_ymd_opt(2030, 6, 16),
                    NaiveTime::from_hms_opt(12, 0, 0),
                    Some(2),
                ),
            },
            IndexedReservation {
                index: 2,
                record: ReservationRecord::new("Bob, Jr.", None, None, Some(10)),
            },
        ]
    }

    #[test]
    fn test_table_alignment() {
        let text = TableFormatter.format(&listing()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Index      Name        Date   Time  Number of Guests"
        );
        assert_eq!(
            lines[1],
            "    1     Alice  16-06-2030  12:00                 2"
        );
        assert_eq!(
            lines[2],
            "    2  Bob, Jr.                                   10"
        );
    }

    #[test]
    fn test_table_header_only_when_empty() {
        let text = TableFormatter.format(&[]).unwrap();
        assert_eq!(text, "Index  Name  Date  Time  Number of Guests");
    }

    #[test]
    fn test_json_nulls_for_missing_values() {
        let text = JsonFormatter.format(&listing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[0]["date"], "16-06-2030");
        assert_eq!(value[0]["time"], "12:00");
        assert_eq!(value[0]["guests"], 2);
        assert_eq!(value[1]["index"], 2);
        assert!(value[1]["date"].is_null());
        assert!(value[1]["time"].is_null());
    }

    #[test]
    fn test_csv_quotes_commas() {
        let text = DelimitedFormatter::new(b',').format(&listing()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Index,Name,Date,Time,Number of Guests");
        assert_eq!(lines[1], "1,Alice,16-06-2030,12:00,2");
        assert_eq!(lines[2], "2,\"Bob, Jr.\",,,10");
    }

    #[test]
    fn test_tsv() {
        let text = DelimitedFormatter::new(b'\t').format(&listing()).unwrap();
        assert_eq!(text.lines().nth(1), Some("1\tAlice\t16-06-2030\t12:00\t2"));
    }
}
