//! Content fingerprints for memoized builds
//!
//! An index is a pure function of its inputs, so a host that re-renders
//! often can skip rebuilding while the fingerprint is unchanged.

use std::fmt;

use campuscal_domain::{CategoryFilter, RawCalendarEvent, RawPost, Result};
use tracing::trace;

use crate::aggregation::{CalendarIndex, EventAggregator};

/// BLAKE3 digest (hex) of the canonical JSON of one build's inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputFingerprint(String);

impl InputFingerprint {
    /// Fingerprint posts, events and selection.
    ///
    /// The selection is hashed in sorted order, so insertion order of the
    /// filter does not matter; record order does.
    ///
    /// # Errors
    /// Returns a serialization error if a record cannot be encoded.
    pub fn compute(
        posts: &[RawPost],
        events: &[RawCalendarEvent],
        selected: &CategoryFilter,
    ) -> Result<Self> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&serde_json::to_vec(posts)?);
        hasher.update(b"\x1e");
        hasher.update(&serde_json::to_vec(events)?);
        hasher.update(b"\x1e");
        hasher.update(&serde_json::to_vec(&selected.sorted_names())?);
        Ok(Self(hex::encode(hasher.finalize().as_bytes())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregator that reuses its last index while inputs are unchanged
#[derive(Debug, Default)]
pub struct MemoizedAggregator {
    aggregator: EventAggregator,
    last: Option<(InputFingerprint, CalendarIndex)>,
    builds: usize,
}

impl MemoizedAggregator {
    #[must_use]
    pub fn new(aggregator: EventAggregator) -> Self {
        Self { aggregator, last: None, builds: 0 }
    }

    /// Index for the given inputs, rebuilt only when their fingerprint
    /// differs from the previous call.
    ///
    /// # Errors
    /// Propagates fingerprinting failures.
    pub fn build(
        &mut self,
        posts: &[RawPost],
        events: &[RawCalendarEvent],
        selected: &CategoryFilter,
    ) -> Result<&CalendarIndex> {
        let fingerprint = InputFingerprint::compute(posts, events, selected)?;
        let entry = match self.last.take() {
            Some((previous, index)) if previous == fingerprint => {
                trace!(%fingerprint, "inputs unchanged, reusing index");
                (previous, index)
            }
            _ => {
                self.builds += 1;
                (fingerprint, self.aggregator.build(posts, events, selected))
            }
        };
        Ok(&self.last.insert(entry).1)
    }

    /// Number of full builds performed.
    #[must_use]
    pub const fn builds(&self) -> usize {
        self.builds
    }

    /// Drop the cached index; the next call rebuilds.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
