//! Raw source records
//!
//! These mirror what upstream collaborators hand us after deserialization.
//! Field names follow the camelCase JSON feeds. Both record kinds decode
//! through a lenient wire shape where `_id` and `id` are separate keys.
//! Posts stay a flat record of optional fields; calendar events are resolved
//! into a typed [`EventSchedule`] so the engine never probes "which date
//! field is set".

use serde::{Deserialize, Serialize};

use crate::constants::BULK_IMPORT_SOURCE_TAGS;
use crate::utils::loose;

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// Announcement/post record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PostRecord")]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub iso_date: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub time: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_urgent: Option<bool>,
    /// Origin tag (`manual`, `csv`, ...)
    pub source: Option<String>,
}

/// Lenient wire shape of a post
///
/// `_id` and `id` are distinct keys; document stores often send both.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PostRecord {
    #[serde(deserialize_with = "loose::opt_string")]
    id: Option<String>,
    #[serde(rename = "_id", deserialize_with = "loose::opt_string")]
    store_id: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    title: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    date: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    iso_date: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    category: Option<String>,
    #[serde(rename = "type", deserialize_with = "loose::opt_string")]
    kind: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    time: Option<String>,
    #[serde(deserialize_with = "loose::opt_bool")]
    is_pinned: Option<bool>,
    #[serde(deserialize_with = "loose::opt_bool")]
    is_urgent: Option<bool>,
    #[serde(deserialize_with = "loose::opt_string")]
    source: Option<String>,
}

impl From<PostRecord> for RawPost {
    fn from(record: PostRecord) -> Self {
        Self {
            id: coalesce_id(record.id, record.store_id),
            title: record.title,
            date: record.date,
            iso_date: record.iso_date,
            category: record.category,
            kind: record.kind,
            time: record.time,
            is_pinned: record.is_pinned,
            is_urgent: record.is_urgent,
            source: record.source,
        }
    }
}

/// `id` when non-blank, otherwise `_id`.
fn coalesce_id(id: Option<String>, store_id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty()).or(store_id)
}

impl RawPost {
    /// Minimal post with a title, category and date string.
    #[must_use]
    pub fn new(title: &str, category: &str, date: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            date: Some(date.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Explicit category, falling back to `type`; blank strings count as absent.
    #[must_use]
    pub fn raw_category(&self) -> Option<&str> {
        non_blank(self.category.as_ref()).or_else(|| non_blank(self.kind.as_ref()))
    }

    /// Whether the post came from a bulk tabular import.
    ///
    /// Those rows duplicate calendar-sourced data and are kept out of the
    /// post stream.
    #[must_use]
    pub fn is_bulk_import(&self) -> bool {
        self.source.as_deref().is_some_and(|tag| {
            let tag = tag.trim();
            BULK_IMPORT_SOURCE_TAGS.iter().any(|bulk| tag.eq_ignore_ascii_case(bulk))
        })
    }

    /// Date strings to try, in precedence order.
    pub fn date_candidates(&self) -> impl Iterator<Item = &str> {
        [self.iso_date.as_deref(), self.date.as_deref()].into_iter().flatten()
    }
}

/// How a calendar event is placed on the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSchedule {
    /// One day, from the first parseable of `iso_date`, `date`, `start_date`
    Single { iso_date: Option<String>, date: Option<String>, start_date: Option<String> },
    /// Inclusive range between two date strings
    DateRange { start: String, end: String },
    /// Week-granularity placeholder; never placed in a day cell
    WeekInMonth { year: Option<i64>, month: Option<i64>, week_of_month: Option<i64> },
    /// Month-granularity placeholder; never placed in a day cell
    MonthOnly { year: Option<i64>, month: Option<i64> },
}

impl EventSchedule {
    /// Single-day schedule from one date string.
    #[must_use]
    pub fn on(date: &str) -> Self {
        Self::Single { iso_date: Some(date.to_string()), date: None, start_date: None }
    }

    /// `dateType` tag this schedule serializes as.
    #[must_use]
    pub const fn date_type(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::DateRange { .. } => "date_range",
            Self::WeekInMonth { .. } => "week_in_month",
            Self::MonthOnly { .. } => "month_only",
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::WeekInMonth { .. } | Self::MonthOnly { .. })
    }

    /// Date strings a single-day schedule tries, in precedence order.
    ///
    /// Empty for every other variant.
    pub fn single_candidates(&self) -> impl Iterator<Item = &str> {
        let fields = match self {
            Self::Single { iso_date, date, start_date } => {
                [iso_date.as_deref(), date.as_deref(), start_date.as_deref()]
            }
            _ => [None, None, None],
        };
        fields.into_iter().flatten()
    }
}

/// Calendar event record, resolved into a typed schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CalendarEventRecord", into = "CalendarEventRecord")]
pub struct RawCalendarEvent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
    pub time: Option<String>,
    pub schedule: EventSchedule,
}

impl RawCalendarEvent {
    #[must_use]
    pub fn new(title: &str, category: &str, schedule: EventSchedule) -> Self {
        Self {
            id: None,
            title: Some(title.to_string()),
            description: None,
            category: Some(category.to_string()),
            kind: None,
            time: None,
            schedule,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }

    /// Explicit category, falling back to `type`; blank strings count as absent.
    #[must_use]
    pub fn raw_category(&self) -> Option<&str> {
        non_blank(self.category.as_ref()).or_else(|| non_blank(self.kind.as_ref()))
    }
}

/// Flat wire shape of a calendar event, as produced by the upstream feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEventRecord {
    #[serde(deserialize_with = "loose::opt_string")]
    pub id: Option<String>,
    /// Document-store key, sent alongside or instead of `id`
    #[serde(
        rename = "_id",
        deserialize_with = "loose::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub store_id: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub category: Option<String>,
    #[serde(rename = "type", deserialize_with = "loose::opt_string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub date_type: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub iso_date: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "loose::opt_int")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "loose::opt_int")]
    pub month: Option<i64>,
    #[serde(deserialize_with = "loose::opt_int")]
    pub week_of_month: Option<i64>,
    #[serde(deserialize_with = "loose::opt_string")]
    pub time: Option<String>,
}

impl CalendarEventRecord {
    /// Resolve the `dateType` discriminator and its fields.
    ///
    /// Absent or unknown `dateType` means `single`. A `date_range` missing
    /// either bound degrades to `single` over the remaining date fields.
    fn schedule(&self) -> EventSchedule {
        let single = || EventSchedule::Single {
            iso_date: self.iso_date.clone(),
            date: self.date.clone(),
            start_date: self.start_date.clone(),
        };

        let kind = self.date_type.as_deref().map(|t| t.trim().to_ascii_lowercase());
        match kind.as_deref() {
            Some("date_range") => match (&self.start_date, &self.end_date) {
                (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                    EventSchedule::DateRange { start: start.clone(), end: end.clone() }
                }
                _ => single(),
            },
            Some("week" | "week_in_month") => EventSchedule::WeekInMonth {
                year: self.year,
                month: self.month,
                week_of_month: self.week_of_month,
            },
            Some("month" | "month_only") => {
                EventSchedule::MonthOnly { year: self.year, month: self.month }
            }
            _ => single(),
        }
    }
}

impl From<CalendarEventRecord> for RawCalendarEvent {
    fn from(record: CalendarEventRecord) -> Self {
        let schedule = record.schedule();
        Self {
            id: coalesce_id(record.id, record.store_id),
            title: record.title,
            description: record.description,
            category: record.category,
            kind: record.kind,
            time: record.time,
            schedule,
        }
    }
}

impl From<RawCalendarEvent> for CalendarEventRecord {
    fn from(event: RawCalendarEvent) -> Self {
        let mut record = Self {
            id: event.id,
            title: event.title,
            description: event.description,
            category: event.category,
            kind: event.kind,
            date_type: Some(event.schedule.date_type().to_string()),
            time: event.time,
            ..Self::default()
        };
        match event.schedule {
            EventSchedule::Single { iso_date, date, start_date } => {
                record.iso_date = iso_date;
                record.date = date;
                record.start_date = start_date;
            }
            EventSchedule::DateRange { start, end } => {
                record.start_date = Some(start);
                record.end_date = Some(end);
            }
            EventSchedule::WeekInMonth { year, month, week_of_month } => {
                record.year = year;
                record.month = month;
                record.week_of_month = week_of_month;
            }
            EventSchedule::MonthOnly { year, month } => {
                record.year = year;
                record.month = month;
            }
        }
        record
    }
}
