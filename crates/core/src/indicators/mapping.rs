//! Static category → color/priority table

use campuscal_domain::constants::{
    COLOR_ACADEMIC, COLOR_ANNOUNCEMENT, COLOR_EVENT, COLOR_FALLBACK, COLOR_INSTITUTIONAL,
    COLOR_NEWS, FALLBACK_PRIORITY,
};
use campuscal_domain::{Category, IndicatorColor};

/// Display color and sort priority of a category (lower sorts first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub color: IndicatorColor,
    pub priority: u8,
}

#[must_use]
pub fn indicator_style(category: &Category) -> IndicatorStyle {
    let (hex, priority) = match category {
        Category::Institutional => (COLOR_INSTITUTIONAL, 1),
        Category::Academic => (COLOR_ACADEMIC, 2),
        Category::Event => (COLOR_EVENT, 3),
        Category::Announcement => (COLOR_ANNOUNCEMENT, 4),
        Category::News => (COLOR_NEWS, 5),
        Category::Other(_) => (COLOR_FALLBACK, FALLBACK_PRIORITY),
    };
    IndicatorStyle { color: IndicatorColor::from_static(hex), priority }
}

#[must_use]
pub fn color_for(category: &Category) -> IndicatorColor {
    indicator_style(category).color
}

#[must_use]
pub fn priority_for(category: &Category) -> u8 {
    indicator_style(category).priority
}
