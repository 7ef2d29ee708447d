//! Indicator colors

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display color of a category indicator (`#RRGGBB`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorColor(Cow<'static, str>);

impl IndicatorColor {
    /// Color from a static palette entry; no allocation.
    #[must_use]
    pub const fn from_static(hex: &'static str) -> Self {
        Self(Cow::Borrowed(hex))
    }

    #[must_use]
    pub fn new(hex: impl Into<String>) -> Self {
        Self(Cow::Owned(hex.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into `(r, g, b)` components.
    #[must_use]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered indicator colors for one day cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    /// One color per distinct category, highest priority first
    pub colors: Vec<IndicatorColor>,
    /// Number of distinct categories
    pub unique_count: usize,
}

impl Indicators {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
