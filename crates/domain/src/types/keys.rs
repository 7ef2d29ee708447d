//! Day and month keys
//!
//! `DayKey` is the canonical calendar-date identifier of the index; it is
//! always computed in the engine's reference timezone. `MonthKey` identifies
//! a month counter bucket and renders as `"year-month"` with an unpadded,
//! 1-based month (`"2024-6"`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CampusCalError, Result};

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical calendar date (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from calendar components; `None` for impossible dates.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Month bucket this day belongs to.
    #[must_use]
    pub fn month_key(self) -> MonthKey {
        MonthKey { year: self.0.year(), month: self.0.month() }
    }

    /// The following calendar day, `None` at the end of chrono's range.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add_days(Days::new(1)).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Milliseconds since the Unix epoch of this date's UTC midnight.
    ///
    /// Equivalent representation of the key for consumers that index by
    /// timestamp.
    #[must_use]
    pub fn utc_midnight_millis(self) -> i64 {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = CampusCalError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|e| CampusCalError::InvalidInput(format!("Invalid day key '{s}': {e}")))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Month counter bucket (`year-month`, month 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key; `None` unless `month` is within 1-12.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> Option<DayKey> {
        DayKey::from_ymd(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = CampusCalError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CampusCalError::InvalidInput(format!("Invalid month key '{s}'"));
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_day_key_display_is_zero_padded() {
        assert_eq!(DayKey::from_ymd(2024, 6, 3).unwrap().to_string(), "2024-06-03");
    }

    #[test]
    fn test_day_key_rejects_impossible_dates() {
        assert!(DayKey::from_ymd(2023, 2, 29).is_none());
        assert!("2024-13-01".parse::<DayKey>().is_err());
        assert!("03/06/2024".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_day_key_month_bucket_is_unpadded() {
        assert_eq!(day("2024-06-30").month_key().to_string(), "2024-6");
        assert_eq!(day("2024-12-01").month_key().to_string(), "2024-12");
    }

    #[test]
    fn test_days_until_and_next() {
        let start = day("2024-02-28");
        assert_eq!(start.next(), Some(day("2024-02-29")));
        assert_eq!(start.days_until(day("2024-03-01")), 2);
        assert_eq!(day("2024-03-01").days_until(start), -2);
    }

    #[test]
    fn test_utc_midnight_millis() {
        assert_eq!(day("1970-01-02").utc_midnight_millis(), 86_400_000);
    }

    #[test]
    fn test_month_key_bounds() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
        assert_eq!(MonthKey::new(2024, 6).unwrap().first_day(), Some(day("2024-06-01")));
    }

    #[test]
    fn test_month_key_parses_padded_and_unpadded() {
        assert_eq!("2024-6".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 6).unwrap());
        assert_eq!("2024-06".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 6).unwrap());
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("2024-00".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_keys_serialize_as_strings() {
        let json = serde_json::to_string(&(day("2024-01-05"), MonthKey::new(2024, 1).unwrap()))
            .unwrap();
        assert_eq!(json, r#"["2024-01-05","2024-1"]"#);

        let back: DayKey = serde_json::from_str("\"2024-01-05\"").unwrap();
        assert_eq!(back, day("2024-01-05"));
    }
}
