//! Day keying in the reference timezone
//!
//! Every instant that enters the index is bucketed by the calendar day it
//! falls on in one fixed IANA zone, not the machine's zone. Two instants
//! that share a reference-zone date always produce the same [`DayKey`], so
//! grid queries and stored keys agree no matter where the engine runs.
//!
//! # Accepted date strings
//! 1. RFC 3339 / ISO 8601 instants with an offset (`2024-06-03T01:00:00Z`)
//!    are converted into the reference zone first.
//! 2. Naive date-times (`2024-06-03T09:00:00`) are wall-clock times in the
//!    reference zone, so their date is taken as written.
//! 3. Plain dates (`2024-06-03`) are calendar dates and never shift.
//! 4. Loose `dd/mm/yyyy` dates are accepted as a last resort.

use std::fmt;

use campuscal_domain::{DayKey, EngineConfig, MonthKey};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

const NAIVE_DATETIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const LOOSE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Zone used to assign calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceZone {
    Named(Tz),
    /// Host-local zone, used only when the configured name is unknown
    Local,
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(tz) => f.write_str(tz.name()),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Maps instants and raw date strings onto [`DayKey`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKeyer {
    zone: ReferenceZone,
}

impl DayKeyer {
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self { zone: ReferenceZone::Named(zone) }
    }

    /// Keyer bound to the host's local zone.
    #[must_use]
    pub const fn local() -> Self {
        Self { zone: ReferenceZone::Local }
    }

    /// Resolve an IANA zone name, falling back to the host zone when the
    /// name is not recognised.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name.trim().parse::<Tz>() {
            Ok(tz) => Self::new(tz),
            Err(err) => {
                warn!(
                    timezone = %name,
                    error = %err,
                    "unknown reference timezone, using host zone"
                );
                Self::local()
            }
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::resolve(&config.reference_timezone)
    }

    #[must_use]
    pub const fn zone(&self) -> ReferenceZone {
        self.zone
    }

    /// Calendar date of `instant` in the reference zone.
    #[must_use]
    pub fn local_date<Z: TimeZone>(&self, instant: &DateTime<Z>) -> NaiveDate {
        match self.zone {
            ReferenceZone::Named(tz) => instant.with_timezone(&tz).date_naive(),
            ReferenceZone::Local => instant.with_timezone(&Local).date_naive(),
        }
    }

    #[must_use]
    pub fn day_key<Z: TimeZone>(&self, instant: &DateTime<Z>) -> DayKey {
        DayKey::new(self.local_date(instant))
    }

    #[must_use]
    pub fn month_key<Z: TimeZone>(&self, instant: &DateTime<Z>) -> MonthKey {
        self.day_key(instant).month_key()
    }

    /// Today's key in the reference zone.
    #[must_use]
    pub fn today(&self) -> DayKey {
        self.day_key(&Utc::now())
    }

    /// Parse a raw date string into a day key; `None` when unparseable.
    #[must_use]
    pub fn parse_day(&self, raw: &str) -> Option<DayKey> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(self.day_key(&instant));
        }
        if let Ok(instant) = DateTime::parse_from_str(raw, OFFSET_DATETIME_FORMAT) {
            return Some(self.day_key(&instant));
        }
        if let Some(naive) = parse_naive_datetime(raw) {
            return Some(DayKey::new(naive.date()));
        }
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Some(DayKey::new(date));
        }
        NaiveDate::parse_from_str(raw, LOOSE_DATE_FORMAT).ok().map(DayKey::new)
    }

    /// First candidate string that parses, in the order given.
    pub fn parse_first<'a>(&self, candidates: impl IntoIterator<Item = &'a str>) -> Option<DayKey> {
        candidates.into_iter().find_map(|raw| self.parse_day(raw))
    }

    /// True when both instants fall on the same reference-zone day.
    #[must_use]
    pub fn same_day<A: TimeZone, B: TimeZone>(&self, a: &DateTime<A>, b: &DateTime<B>) -> bool {
        self.day_key(a) == self.day_key(b)
    }

    #[must_use]
    pub fn is_today<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        self.is_today_at(instant, &Utc::now())
    }

    /// [`Self::is_today`] against an explicit clock.
    #[must_use]
    pub fn is_today_at<Z: TimeZone>(&self, instant: &DateTime<Z>, now: &DateTime<Utc>) -> bool {
        self.same_day(instant, now)
    }

    /// True when `instant` is on the selected day; `false` with no selection.
    #[must_use]
    pub fn is_selected<Z: TimeZone>(
        &self,
        instant: &DateTime<Z>,
        selected: Option<&DateTime<Utc>>,
    ) -> bool {
        selected.is_some_and(|selected| self.same_day(instant, selected))
    }
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn manila() -> DayKeyer {
        DayKeyer::new(chrono_tz::Asia::Manila)
    }

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_instants_convert_into_reference_zone() {
        let keyer = manila();
        // 16:30Z is 00:30 the next day in UTC+8
        assert_eq!(keyer.parse_day("2024-03-10T16:30:00Z"), Some(key("2024-03-11")));
        assert_eq!(keyer.parse_day("2024-03-11T00:00:01+08:00"), Some(key("2024-03-11")));
        assert_eq!(keyer.parse_day("2024-03-10T15:59:59.999Z"), Some(key("2024-03-10")));
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(manila().parse_day("2024-03-10T23:00:00-0500"), Some(key("2024-03-11")));
    }

    #[test]
    fn test_plain_dates_do_not_shift() {
        let keyers = [manila(), DayKeyer::new(chrono_tz::America::Los_Angeles)];
        for keyer in keyers {
            assert_eq!(keyer.parse_day("2024-06-03"), Some(key("2024-06-03")));
            assert_eq!(keyer.parse_day("2024-06-03T23:30:00"), Some(key("2024-06-03")));
            assert_eq!(keyer.parse_day("2024-06-03 07:15"), Some(key("2024-06-03")));
        }
    }

    #[test]
    fn test_loose_day_month_year() {
        let keyer = manila();
        assert_eq!(keyer.parse_day("15/06/2024"), Some(key("2024-06-15")));
        assert_eq!(keyer.parse_day(" 01/12/2023 "), Some(key("2023-12-01")));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let keyer = manila();
        for raw in ["", "   ", "tomorrow", "2024-13-01", "31/02/2024", "20240603"] {
            assert_eq!(keyer.parse_day(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_parse_first_skips_unparseable_candidates() {
        let keyer = manila();
        assert_eq!(keyer.parse_first(["nope", "2024-06-04"]), Some(key("2024-06-04")));
        assert_eq!(keyer.parse_first(["nope"]), None);
    }

    #[test]
    fn test_unknown_zone_falls_back_to_local() {
        assert_eq!(DayKeyer::resolve("Mars/Olympus_Mons").zone(), ReferenceZone::Local);
        assert_eq!(
            DayKeyer::resolve(" Asia/Manila ").zone(),
            ReferenceZone::Named(chrono_tz::Asia::Manila)
        );
    }

    #[test]
    fn test_from_config_uses_configured_zone() {
        let config = EngineConfig::with_timezone("Europe/Berlin");
        assert_eq!(DayKeyer::from_config(&config).zone().to_string(), "Europe/Berlin");
    }

    #[test]
    fn test_today_and_selected_predicates() {
        let keyer = manila();
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 20, 0, 0).unwrap(); // 04:00 on the 4th in Manila
        let late = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 4, 23, 59, 0)
            .unwrap();
        let yesterday = Utc.with_ymd_and_hms(2024, 6, 3, 15, 0, 0).unwrap();

        assert!(keyer.is_today_at(&late, &now));
        assert!(!keyer.is_today_at(&yesterday, &now));
        assert!(keyer.is_selected(&late, Some(&now)));
        assert!(!keyer.is_selected(&late, None));
    }

    #[test]
    fn test_month_key_follows_reference_zone() {
        let keyer = manila();
        let instant = Utc.with_ymd_and_hms(2024, 6, 30, 17, 0, 0).unwrap();
        assert_eq!(keyer.month_key(&instant), MonthKey::new(2024, 7).unwrap());
    }
}
