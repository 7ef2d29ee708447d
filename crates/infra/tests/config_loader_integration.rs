//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! feeding it to the aggregator.

use campuscal_core::{EventAggregator, ReferenceZone};
use campuscal_domain::{CampusCalError, CategoryFilter, EventSchedule, LogFormat, RawCalendarEvent};
use campuscal_infra::config;
use tempfile::TempDir;

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("campuscal.json");
    std::fs::write(
        &path,
        r#"{
            "reference_timezone": "America/New_York",
            "range_collapse_threshold_days": 14,
            "range_hard_cap_days": 120,
            "log_level": "campuscal_core=debug",
            "log_format": "json"
        }"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("json config");

    assert_eq!(config.reference_timezone, "America/New_York");
    assert_eq!(config.range_collapse_threshold_days, 14);
    assert_eq!(config.range_hard_cap_days, 120);
    assert_eq!(config.log_level, "campuscal_core=debug");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_load_config_from_partial_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "reference_timezone = \"Europe/London\"\n")
        .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("toml config");

    assert_eq!(config.reference_timezone, "Europe/London");
    assert_eq!(config.range_collapse_threshold_days, 90);
    assert_eq!(config.range_hard_cap_days, 365);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn test_invalid_file_contents_are_config_errors() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "range_hard_cap_days = \"forever\"\n").expect("Failed to write config");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(
        matches!(err, CampusCalError::Config(ref msg) if msg.starts_with("Invalid TOML format"))
    );
}

#[test]
fn test_loaded_config_drives_the_aggregator() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("campuscal.toml"),
        concat!(
            "reference_timezone = \"UTC\"\n",
            "range_collapse_threshold_days = 3\n",
            "range_hard_cap_days = 10\n",
        ),
    )
    .expect("Failed to write config");

    let path = config::probe_in(&[dir.path().to_path_buf()]).expect("probe finds file");
    let config = config::load_from_file(Some(path)).expect("toml config");
    let aggregator = EventAggregator::new(&config).expect("valid config");

    assert!(matches!(aggregator.keyer().zone(), ReferenceZone::Named(tz) if tz.name() == "UTC"));

    let week = RawCalendarEvent::new(
        "Retreat",
        "institutional",
        EventSchedule::DateRange { start: "2024-06-10".into(), end: "2024-06-16".into() },
    );
    let index = aggregator.build(&[], &[week], &CategoryFilter::taxonomy());
    assert_eq!(index.len(), 2);
    assert_eq!(index.stats().collapsed_ranges, 1);
}

#[test]
fn test_inconsistent_thresholds_are_rejected_by_the_aggregator() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("campuscal.json");
    std::fs::write(&path, r#"{"range_collapse_threshold_days": 100, "range_hard_cap_days": 50}"#)
        .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("parses");
    assert!(matches!(EventAggregator::new(&config), Err(CampusCalError::Config(_))));
}
