//! Shared fixtures for `campuscal-core` integration tests.
//!
//! Builders keep the scenario tests focused on behaviour: each helper
//! produces the raw record shape the upstream feeds send.

#![allow(dead_code)]

use campuscal_core::EventAggregator;
use campuscal_domain::{
    CategoryFilter, DayKey, EngineConfig, EventSchedule, MonthKey, RawCalendarEvent, RawPost,
};

/// Aggregator keyed to UTC+8, the default reference zone.
pub fn manila_aggregator() -> EventAggregator {
    EventAggregator::new(&EngineConfig::default()).unwrap()
}

/// Aggregator keyed to an arbitrary IANA zone.
pub fn aggregator_in(zone: &str) -> EventAggregator {
    EventAggregator::new(&EngineConfig::with_timezone(zone)).unwrap()
}

pub fn all_categories() -> CategoryFilter {
    CategoryFilter::taxonomy()
}

pub fn select(names: &[&str]) -> CategoryFilter {
    names.iter().collect()
}

pub fn post(id: &str, title: &str, category: &str, date: &str) -> RawPost {
    RawPost::new(title, category, date).with_id(id)
}

pub fn single(id: &str, title: &str, category: &str, date: &str) -> RawCalendarEvent {
    RawCalendarEvent::new(title, category, EventSchedule::on(date)).with_id(id)
}

pub fn range(id: &str, title: &str, category: &str, start: &str, end: &str) -> RawCalendarEvent {
    let schedule = EventSchedule::DateRange { start: start.to_string(), end: end.to_string() };
    RawCalendarEvent::new(title, category, schedule).with_id(id)
}

pub fn month_only(title: &str, category: &str, year: i64, month: i64) -> RawCalendarEvent {
    let schedule = EventSchedule::MonthOnly { year: Some(year), month: Some(month) };
    RawCalendarEvent::new(title, category, schedule)
}

pub fn week_in_month(
    title: &str,
    category: &str,
    year: i64,
    month: i64,
    week: i64,
) -> RawCalendarEvent {
    let schedule = EventSchedule::WeekInMonth {
        year: Some(year),
        month: Some(month),
        week_of_month: Some(week),
    };
    RawCalendarEvent::new(title, category, schedule)
}

pub fn day(s: &str) -> DayKey {
    s.parse().unwrap()
}

pub fn month(year: i32, month: u32) -> MonthKey {
    MonthKey::new(year, month).unwrap()
}
