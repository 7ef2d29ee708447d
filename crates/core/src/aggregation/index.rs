//! Built calendar index and its queries

use campuscal_domain::{DayKey, Indicators, MonthKey, NormalizedItem, PlaceholderItem};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::accumulator::{DayMap, IndexAccumulator, MonthMap};
use super::stats::BuildStats;
use crate::day_key::DayKeyer;
use crate::indicators::indicators_for;

/// Immutable result of one aggregation pass.
///
/// Lookups key instants with the same [`DayKeyer`] that built the index, so
/// a query instant and a stored entry agree whenever they share a
/// reference-zone date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarIndex {
    #[serde(skip)]
    keyer: DayKeyer,
    events: DayMap<Vec<NormalizedItem>>,
    month_counts: MonthMap<u32>,
    placeholders: MonthMap<Vec<PlaceholderItem>>,
    stats: BuildStats,
}

impl CalendarIndex {
    pub(crate) fn from_accumulator(keyer: DayKeyer, acc: IndexAccumulator) -> Self {
        Self {
            keyer,
            events: acc.days,
            month_counts: acc.month_counts,
            placeholders: acc.placeholders,
            stats: acc.stats,
        }
    }

    /// Entries on the reference-zone day containing `instant`, in insertion
    /// order; empty when none.
    #[must_use]
    pub fn events_for_date<Z: TimeZone>(&self, instant: &DateTime<Z>) -> &[NormalizedItem] {
        self.events_for_day(self.keyer.day_key(instant))
    }

    #[must_use]
    pub fn events_for_day(&self, day: DayKey) -> &[NormalizedItem] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Entries plus placeholders in the reference-zone month of `instant`.
    #[must_use]
    pub fn month_count<Z: TimeZone>(&self, instant: &DateTime<Z>) -> u32 {
        self.month_count_for(self.keyer.month_key(instant))
    }

    #[must_use]
    pub fn month_count_for(&self, month: MonthKey) -> u32 {
        self.month_counts.get(&month).copied().unwrap_or_default()
    }

    /// Week/month placeholders recorded for `month`.
    #[must_use]
    pub fn placeholders_for_month(&self, month: MonthKey) -> &[PlaceholderItem] {
        self.placeholders.get(&month).map(Vec::as_slice).unwrap_or_default()
    }

    /// Days of `month` that have at least one entry, ascending.
    #[must_use]
    pub fn days_in_month(&self, month: MonthKey) -> Vec<DayKey> {
        let mut days: Vec<DayKey> =
            self.events.keys().copied().filter(|day| day.month_key() == month).collect();
        days.sort_unstable();
        days
    }

    /// Indicator colors for the day containing `instant`.
    #[must_use]
    pub fn indicators_for_date<Z: TimeZone>(&self, instant: &DateTime<Z>) -> Indicators {
        indicators_for(self.events_for_date(instant))
    }

    #[must_use]
    pub fn event_index(&self) -> &DayMap<Vec<NormalizedItem>> {
        &self.events
    }

    #[must_use]
    pub fn month_counts(&self) -> &MonthMap<u32> {
        &self.month_counts
    }

    #[must_use]
    pub const fn stats(&self) -> &BuildStats {
        &self.stats
    }

    #[must_use]
    pub const fn keyer(&self) -> &DayKeyer {
        &self.keyer
    }

    /// Total day-cell entries across all days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// No day-cell entries; placeholders are not counted, matching [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
