//! Domain constants
//!
//! Centralized location for the engine's fixed policy values and the
//! taxonomy display palette.

// Range expansion policy
pub const RANGE_COLLAPSE_THRESHOLD_DAYS: i64 = 90;
pub const RANGE_HARD_CAP_DAYS: i64 = 365;

// Reference timezone (operating region, UTC+8)
pub const DEFAULT_REFERENCE_TIMEZONE: &str = "Asia/Manila";

// Post source tags that mark bulk tabular imports
pub const BULK_IMPORT_SOURCE_TAGS: &[&str] = &["csv", "csv_upload", "csv_import"];

// Indicator palette (hex, taxonomy-defined)
pub const COLOR_INSTITUTIONAL: &str = "#8B5CF6";
pub const COLOR_ACADEMIC: &str = "#3B82F6";
pub const COLOR_EVENT: &str = "#10B981";
pub const COLOR_ANNOUNCEMENT: &str = "#F59E0B";
pub const COLOR_NEWS: &str = "#EF4444";
pub const COLOR_FALLBACK: &str = "#9CA3AF";

// Shared rank for categories outside the taxonomy
pub const FALLBACK_PRIORITY: u8 = 99;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
