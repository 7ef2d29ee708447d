//! Engine-produced items

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::indicator::IndicatorColor;
use super::keys::{DayKey, MonthKey};
use crate::impl_domain_tag_conversions;

/// Which input stream an item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Post,
    Calendar,
}

impl_domain_tag_conversions!(ItemSource {
    Post => "post",
    Calendar => "calendar",
});

/// Bounds of the date range an item was materialized from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBounds {
    pub start: DayKey,
    pub end: DayKey,
    /// True when the range was too long to expand and only its boundary
    /// days carry entries
    pub collapsed: bool,
}

/// One day-cell entry of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub id: Option<String>,
    pub title: String,
    pub date_key: DayKey,
    pub category: Category,
    pub color: IndicatorColor,
    pub source: ItemSource,
    pub time: Option<String>,
    pub description: Option<String>,
    pub range: Option<RangeBounds>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_urgent: bool,
}

impl NormalizedItem {
    /// Identifier if present and non-empty.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Composite duplicate key: `(source, title, day)`.
    #[must_use]
    pub fn composite_key(&self) -> (ItemSource, &str, DayKey) {
        (self.source, self.title.as_str(), self.date_key)
    }
}

/// Granularity of a placeholder event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderGranularity {
    Week,
    Month,
}

/// Week/month-level calendar event kept out of day cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub id: Option<String>,
    pub title: String,
    pub month: MonthKey,
    pub week_of_month: Option<u32>,
    pub granularity: PlaceholderGranularity,
    pub category: Category,
    pub color: IndicatorColor,
    pub description: Option<String>,
    pub time: Option<String>,
}
