//! Fold state of an index build
//!
//! The accumulator owns the growing day index, month counters and
//! placeholder lists. [`IndexAccumulator::apply`] consumes one candidate at a
//! time; feeding posts before calendar events means a post wins any
//! duplicate contest against an event with the same identity.

use std::collections::HashMap;

use ahash::RandomState;
use campuscal_domain::{DayKey, MonthKey, NormalizedItem, PlaceholderItem};
use tracing::debug;

use super::candidates::Candidate;
use super::stats::{BuildStats, DuplicateRule};

/// Map keyed by day with the fast non-cryptographic hasher
pub type DayMap<V> = HashMap<DayKey, V, RandomState>;
/// Map keyed by month with the fast non-cryptographic hasher
pub type MonthMap<V> = HashMap<MonthKey, V, RandomState>;

/// Which existing entry (if any) makes `candidate` a duplicate.
///
/// Rules are tried in precedence order across the whole day:
/// 1. equal non-empty identifiers
/// 2. equal `(source, title, day)`
/// 3. equal source, title, day and category
#[must_use]
pub fn find_duplicate(
    existing: &[NormalizedItem],
    candidate: &NormalizedItem,
) -> Option<DuplicateRule> {
    if let Some(id) = candidate.identifier() {
        if existing.iter().any(|item| item.identifier() == Some(id)) {
            return Some(DuplicateRule::Identifier);
        }
    }
    let composite = candidate.composite_key();
    if existing.iter().any(|item| item.composite_key() == composite) {
        return Some(DuplicateRule::CompositeKey);
    }
    existing
        .iter()
        .any(|item| {
            item.source == candidate.source
                && item.title == candidate.title
                && item.date_key == candidate.date_key
                && item.category == candidate.category
        })
        .then_some(DuplicateRule::FieldMatch)
}

#[derive(Debug, Default)]
pub(crate) struct IndexAccumulator {
    pub(crate) days: DayMap<Vec<NormalizedItem>>,
    pub(crate) month_counts: MonthMap<u32>,
    pub(crate) placeholders: MonthMap<Vec<PlaceholderItem>>,
    pub(crate) stats: BuildStats,
}

impl IndexAccumulator {
    /// Fold step: absorb one candidate.
    pub(crate) fn apply(mut self, candidate: Candidate) -> Self {
        match candidate {
            Candidate::Day(item) => self.insert_day(item),
            Candidate::Placeholder(item) => self.insert_placeholder(item),
            Candidate::CollapsedRange => self.stats.collapsed_ranges += 1,
            Candidate::Dropped(reason) => self.stats.record_drop(reason),
        }
        self
    }

    fn insert_day(&mut self, item: NormalizedItem) {
        let entries = self.days.entry(item.date_key).or_default();
        if let Some(rule) = find_duplicate(entries, &item) {
            debug!(
                source = %item.source,
                title = %item.title,
                day = %item.date_key,
                %rule,
                "duplicate entry suppressed"
            );
            self.stats.record_duplicate(rule);
            return;
        }

        *self.month_counts.entry(item.date_key.month_key()).or_default() += 1;
        entries.push(item);
        self.stats.day_entries += 1;
    }

    fn insert_placeholder(&mut self, item: PlaceholderItem) {
        *self.month_counts.entry(item.month).or_default() += 1;
        self.placeholders.entry(item.month).or_default().push(item);
        self.stats.placeholders += 1;
    }
}
