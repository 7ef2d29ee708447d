//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_REFERENCE_TIMEZONE, RANGE_COLLAPSE_THRESHOLD_DAYS,
    RANGE_HARD_CAP_DAYS,
};
use crate::errors::{CampusCalError, Result};
use crate::impl_domain_tag_conversions;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl_domain_tag_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Configuration for the aggregation engine
///
/// Every field has a default, so partial JSON/TOML documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA name of the zone day keys are computed in (default: Asia/Manila)
    pub reference_timezone: String,

    /// Ranges spanning more days than this keep only their boundary days
    /// (default: 90)
    pub range_collapse_threshold_days: i64,

    /// Hard upper bound on days materialized by range construction
    /// (default: 365)
    pub range_hard_cap_days: i64,

    /// Default tracing filter directive when `RUST_LOG` is unset
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_timezone: DEFAULT_REFERENCE_TIMEZONE.to_string(),
            range_collapse_threshold_days: RANGE_COLLAPSE_THRESHOLD_DAYS,
            range_hard_cap_days: RANGE_HARD_CAP_DAYS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with a different reference timezone.
    #[must_use]
    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self { reference_timezone: timezone.into(), ..Self::default() }
    }

    /// Check the range policy values for consistency.
    ///
    /// The timezone name is deliberately not checked here: an unknown zone
    /// degrades to local-date extraction instead of failing.
    ///
    /// # Errors
    /// Returns `CampusCalError::Config` when the collapse threshold is not
    /// positive or the hard cap is below the threshold.
    pub fn validate(&self) -> Result<()> {
        if self.range_collapse_threshold_days < 1 {
            return Err(CampusCalError::Config(format!(
                "range_collapse_threshold_days must be at least 1 (got {})",
                self.range_collapse_threshold_days
            )));
        }
        if self.range_hard_cap_days < self.range_collapse_threshold_days {
            return Err(CampusCalError::Config(format!(
                "range_hard_cap_days ({}) must not be below range_collapse_threshold_days ({})",
                self.range_hard_cap_days, self.range_collapse_threshold_days
            )));
        }
        Ok(())
    }
}
