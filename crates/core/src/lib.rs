//! # CampusCal Core
//!
//! Pure calendar aggregation logic - no I/O, no clocks except where a
//! caller asks for "today".
//!
//! This crate contains:
//! - Reference-zone day keying ([`day_key`])
//! - Index construction: normalization, range expansion, dedup and month
//!   counters ([`aggregation`])
//! - Category indicator colors ([`indicators`])
//! - Input fingerprints for memoized builds ([`fingerprint`])
//!
//! ## Architecture Principles
//! - Only depends on `campuscal-domain` for types
//! - Every build is a pure fold over its inputs
//! - Logging via `tracing`; subscribers are installed by the host

pub mod aggregation;
pub mod day_key;
pub mod fingerprint;
pub mod indicators;

pub use aggregation::{
    BuildStats, CalendarIndex, DropReason, DuplicateRule, EventAggregator, RangePolicy,
};
pub use day_key::{DayKeyer, ReferenceZone};
pub use fingerprint::{InputFingerprint, MemoizedAggregator};
pub use indicators::{color_for, indicators_for, priority_for, CategorySetKey, IndicatorMemo};
