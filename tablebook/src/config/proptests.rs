//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::store::StoreBackend;
use proptest::prelude::*;

fn backend_strategy() -> impl Strategy<Value = StoreBackend> {
    prop_oneof![Just(StoreBackend::Sqlite), Just(StoreBackend::Csv)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn time_strategy() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(backend_strategy()),
        prop::option::of("[A-Za-z][A-Za-z0-9_]{0,20}"),
        prop::option::of(time_strategy()),
        prop::option::of(time_strategy()),
        prop::option::of(1u64..3600),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(store, worksheet, opening_time, closing_time, busy, output_format)| Config {
                store,
                worksheet,
                opening_time,
                closing_time,
                busy_timeout_seconds: busy,
                output_format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins field by field when it is set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.store, high.store.or(low.store));
        prop_assert_eq!(result.worksheet, high.worksheet.or(low.worksheet));
        prop_assert_eq!(result.opening_time, high.opening_time.or(low.opening_time));
        prop_assert_eq!(result.closing_time, high.closing_time.or(low.closing_time));
        prop_assert_eq!(
            result.busy_timeout_seconds,
            high.busy_timeout_seconds.or(low.busy_timeout_seconds)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Validation accepts exactly the configs whose hours are ordered
    #[test]
    fn validation_tracks_hour_order(open in time_strategy(), close in time_strategy()) {
        let config = Config {
            opening_time: Some(open.clone()),
            closing_time: Some(close.clone()),
            ..Default::default()
        };
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), open <= close);
    }

    // Configs survive a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
