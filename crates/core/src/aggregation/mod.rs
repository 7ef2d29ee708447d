//! Calendar index construction
//!
//! [`EventAggregator`] folds raw posts and calendar events into a
//! [`CalendarIndex`]: a per-day entry map, per-month counters and
//! week/month placeholders.

pub mod accumulator;
pub mod candidates;
pub mod index;
pub mod range;
pub mod service;
pub mod stats;

pub use accumulator::{find_duplicate, DayMap, MonthMap};
pub use candidates::{Candidate, Materializer};
pub use index::CalendarIndex;
pub use range::{expand_days, span_days, RangePlan, RangePolicy};
pub use service::EventAggregator;
pub use stats::{BuildStats, DropReason, DuplicateRule};
