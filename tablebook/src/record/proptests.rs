//! Property-based tests for the record parse/format boundary.

use super::{
    format_date, format_time, parse_date, parse_guest_count, parse_time, validate_new_time,
    FieldError, OperatingHours,
};
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

// Strategy for generating canonical `DD-MM-YYYY` strings of real dates
fn date_text_strategy() -> impl Strategy<Value = String> {
    (1000i32..=9999, 1u32..=12, 1u32..=31).prop_filter_map("invalid calendar day", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|_| format!("{d:02}-{m:02}-{y:04}"))
    })
}

// Strategy for generating canonical `HH:MM` strings
fn time_text_strategy() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Formatting a parsed date reproduces the input
    #[test]
    fn date_text_round_trips(text in date_text_strategy()) {
        let date = parse_date(&text).unwrap();
        prop_assert_eq!(format_date(Some(date)), text);
    }

    // Formatting a parsed time reproduces the input
    #[test]
    fn time_text_round_trips(text in time_text_strategy()) {
        let time = parse_time(&text).unwrap();
        prop_assert_eq!(format_time(Some(time)), text);
    }

    // Only times inside 08:00..=22:00 pass the default window
    #[test]
    fn default_hours_window(h in 0u32..24, m in 0u32..60) {
        let time = NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let inside = (8..22).contains(&h) || (h == 22 && m == 0);
        let result = validate_new_time(time, &OperatingHours::default());
        prop_assert_eq!(result.is_ok(), inside);
        if !inside {
            let is_outside_hours = matches!(result, Err(FieldError::OutsideHours { .. }));
            prop_assert!(is_outside_hours);
        }
    }

    // Guest counts are accepted exactly when positive
    #[test]
    fn guest_count_positive_only(n in -1000i64..1000) {
        let result = parse_guest_count(&n.to_string());
        if n > 0 {
            prop_assert_eq!(result.unwrap(), u32::try_from(n).unwrap());
        } else {
            prop_assert_eq!(result.unwrap_err(), FieldError::NonPositiveGuestCount { value: n });
        }
    }
}
