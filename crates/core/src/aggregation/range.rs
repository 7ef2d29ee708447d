//! Date-range expansion policy
//!
//! A range event normally gets one index entry per day it covers. Long
//! ranges (semesters, academic years) would flood the grid, so past the
//! collapse threshold only the first and last days carry entries. The hard
//! cap is an independent bound on [`expand_days`] itself.

use campuscal_domain::constants::{RANGE_COLLAPSE_THRESHOLD_DAYS, RANGE_HARD_CAP_DAYS};
use campuscal_domain::{DayKey, EngineConfig};

/// Thresholds governing range expansion, in inclusive days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePolicy {
    collapse_threshold_days: i64,
    hard_cap_days: i64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            collapse_threshold_days: RANGE_COLLAPSE_THRESHOLD_DAYS,
            hard_cap_days: RANGE_HARD_CAP_DAYS,
        }
    }
}

/// How a range lands in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangePlan {
    /// One entry per covered day
    Expanded(Vec<DayKey>),
    /// Boundary days only
    Collapsed(Vec<DayKey>),
}

impl RangePlan {
    #[must_use]
    pub fn days(&self) -> &[DayKey] {
        match self {
            Self::Expanded(days) | Self::Collapsed(days) => days,
        }
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed(_))
    }
}

impl RangePolicy {
    #[must_use]
    pub const fn new(collapse_threshold_days: i64, hard_cap_days: i64) -> Self {
        Self { collapse_threshold_days, hard_cap_days }
    }

    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.range_collapse_threshold_days, config.range_hard_cap_days)
    }

    #[must_use]
    pub const fn collapse_threshold_days(&self) -> i64 {
        self.collapse_threshold_days
    }

    #[must_use]
    pub const fn hard_cap_days(&self) -> i64 {
        self.hard_cap_days
    }

    /// Plan the entries for `start..=end`; `None` when `end` precedes
    /// `start`.
    #[must_use]
    pub fn plan(&self, start: DayKey, end: DayKey) -> Option<RangePlan> {
        let span = span_days(start, end);
        if span < 1 {
            return None;
        }
        if span > self.collapse_threshold_days {
            return Some(RangePlan::Collapsed(boundary_days(start, end)));
        }
        let days = expand_days(start, end, self.hard_cap_days);
        if span > self.hard_cap_days {
            Some(RangePlan::Collapsed(days))
        } else {
            Some(RangePlan::Expanded(days))
        }
    }
}

/// Inclusive day count of `start..=end` (zero or negative when inverted).
#[must_use]
pub fn span_days(start: DayKey, end: DayKey) -> i64 {
    start.days_until(end) + 1
}

/// Every day in `start..=end`, or just the boundaries when the span exceeds
/// `hard_cap_days`.
#[must_use]
pub fn expand_days(start: DayKey, end: DayKey, hard_cap_days: i64) -> Vec<DayKey> {
    let span = span_days(start, end);
    if span < 1 {
        return Vec::new();
    }
    if span > hard_cap_days {
        return boundary_days(start, end);
    }

    let mut days = Vec::with_capacity(usize::try_from(span).unwrap_or_default());
    let mut current = Some(start);
    while let Some(day) = current.filter(|day| *day <= end) {
        days.push(day);
        current = day.next();
    }
    days
}

fn boundary_days(start: DayKey, end: DayKey) -> Vec<DayKey> {
    if start == end {
        vec![start]
    } else {
        vec![start, end]
    }
}
