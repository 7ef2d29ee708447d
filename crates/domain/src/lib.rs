//! # CampusCal Domain
//!
//! Types shared by the CampusCal aggregation engine.
//!
//! This crate contains:
//! - Raw post and calendar-event records (as deserialized from upstream feeds)
//! - Normalized items, day/month keys, category taxonomy, indicator colors
//! - Error types and Result definitions
//! - Engine configuration and policy constants
//!
//! ## Architecture
//! - No dependencies on other CampusCal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::category::normalize_category;
