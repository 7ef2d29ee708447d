//! Event aggregation service
//!
//! Builds a [`CalendarIndex`] from posts, calendar events and the selected
//! categories as a single fold:
//!
//! 1. Posts are materialized first, in input order. Bulk imports and
//!    uncategorized posts are dropped; posts ignore the selection.
//! 2. Calendar events follow, in input order. Uncategorized or unselected
//!    events are dropped; single events land on one day, ranges on every
//!    covered day (or just the boundaries past the collapse threshold), and
//!    week/month placeholders only bump their month counter.
//! 3. Each day entry is checked against that day's existing entries and
//!    suppressed if it is a duplicate; otherwise it is appended and its
//!    month counter incremented.
//!
//! The build is pure: the same inputs and configuration always produce the
//! same index, and the inputs are never mutated.

use campuscal_domain::{CategoryFilter, EngineConfig, RawCalendarEvent, RawPost, Result};
use tracing::debug;

use super::accumulator::IndexAccumulator;
use super::candidates::Materializer;
use super::index::CalendarIndex;
use super::range::RangePolicy;
use crate::day_key::DayKeyer;

/// Builds calendar indexes for one reference zone and range policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventAggregator {
    keyer: DayKeyer,
    policy: RangePolicy,
}

impl Default for EventAggregator {
    fn default() -> Self {
        Self::from_parts(DayKeyer::from_config(&EngineConfig::default()), RangePolicy::default())
    }
}

impl EventAggregator {
    /// Create an aggregator from validated configuration.
    ///
    /// # Errors
    /// Returns [`campuscal_domain::CampusCalError::Config`] when the range
    /// thresholds are inconsistent.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(DayKeyer::from_config(config), RangePolicy::from_config(config)))
    }

    #[must_use]
    pub const fn from_parts(keyer: DayKeyer, policy: RangePolicy) -> Self {
        Self { keyer, policy }
    }

    #[must_use]
    pub const fn keyer(&self) -> &DayKeyer {
        &self.keyer
    }

    #[must_use]
    pub const fn policy(&self) -> &RangePolicy {
        &self.policy
    }

    /// Build the index. See the module docs for the algorithm.
    #[must_use]
    pub fn build(
        &self,
        posts: &[RawPost],
        events: &[RawCalendarEvent],
        selected: &CategoryFilter,
    ) -> CalendarIndex {
        let materializer = Materializer::new(&self.keyer, &self.policy);

        let acc = posts
            .iter()
            .flat_map(|post| materializer.post(post))
            .chain(events.iter().flat_map(|event| materializer.calendar_event(event, selected)))
            .fold(IndexAccumulator::default(), IndexAccumulator::apply);

        let index = CalendarIndex::from_accumulator(self.keyer, acc);
        let stats = index.stats();
        debug!(
            zone = %self.keyer.zone(),
            posts = posts.len(),
            events = events.len(),
            selected = selected.len(),
            days = index.event_index().len(),
            entries = stats.day_entries,
            placeholders = stats.placeholders,
            duplicates = stats.duplicates_suppressed(),
            dropped = stats.total_dropped(),
            collapsed_ranges = stats.collapsed_ranges,
            "calendar index built"
        );
        index
    }
}
