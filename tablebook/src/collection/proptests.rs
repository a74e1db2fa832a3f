//! Property-based tests for collection load/serialize.

use super::ReservationCollection;
use crate::record::ReservationRecord;
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

// Strategy for generating fully valid records
fn record_strategy() -> impl Strategy<Value = ReservationRecord> {
    (
        "[A-Za-z][A-Za-z ,'\"-]{0,20}",
        (2000i32..2100, 1u32..=12, 1u32..=28),
        (8u32..22, 0u32..60),
        1u32..=40,
    )
        .prop_map(|(name, (y, m, d), (h, min), guests)| {
            ReservationRecord::new(
                name,
                NaiveDate::from_ymd_opt(y, m, d),
                NaiveTime::from_hms_opt(h, min, 0),
                Some(guests),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // load(serialize(c)) reproduces the same records
    #[test]
    fn collection_round_trips(records in prop::collection::vec(record_strategy(), 0..20)) {
        let mut collection = ReservationCollection::new();
        for record in &records {
            collection.add(record.clone());
        }

        let reloaded = ReservationCollection::load(&collection.serialize());
        prop_assert_eq!(reloaded.records(), records.as_slice());
        prop_assert_eq!(reloaded, collection);
    }

    // Every serialized row has exactly one cell per header column
    #[test]
    fn serialized_rows_are_rectangular(records in prop::collection::vec(record_strategy(), 0..20)) {
        let mut collection = ReservationCollection::new();
        for record in records {
            collection.add(record);
        }

        let grid = collection.serialize();
        let width = collection.header().len();
        prop_assert!(grid.iter().all(|row| row.len() == width));
    }
}
