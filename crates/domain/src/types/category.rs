//! Category taxonomy

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::category::normalize_category;

/// Normalized category of a schedulable item.
///
/// The five named variants form the fixed taxonomy. `Other` carries
/// pass-through categories in canonical casing (see [`normalize_category`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Academic,
    Institutional,
    Announcement,
    Event,
    News,
    Other(String),
}

impl Category {
    /// The fixed taxonomy, in display-priority order.
    pub const TAXONOMY: [Self; 5] =
        [Self::Institutional, Self::Academic, Self::Event, Self::Announcement, Self::News];

    /// Normalize a raw category string (see [`normalize_category`]).
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        normalize_category(raw)
    }

    /// Canonical display name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Academic => "Academic",
            Self::Institutional => "Institutional",
            Self::Announcement => "Announcement",
            Self::Event => "Event",
            Self::News => "News",
            Self::Other(name) => name,
        }
    }

    /// Lowercase name used by selection filters.
    #[must_use]
    pub fn filter_key(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Whether this category belongs to the fixed taxonomy.
    #[must_use]
    pub const fn is_taxonomy(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        normalize_category(Some(raw))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(normalize_category(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_order_is_priority_order() {
        let names: Vec<&str> = Category::TAXONOMY.iter().map(Category::as_str).collect();
        assert_eq!(names, ["Institutional", "Academic", "Event", "Announcement", "News"]);
    }

    #[test]
    fn test_filter_key_is_lowercase() {
        assert_eq!(Category::Institutional.filter_key(), "institutional");
        assert_eq!(Category::Other("Sports".into()).filter_key(), "sports");
    }

    #[test]
    fn test_serde_uses_display_name_and_normalizes_on_read() {
        let json = serde_json::to_string(&Category::Academic).unwrap();
        assert_eq!(json, "\"Academic\"");

        let parsed: Category = serde_json::from_str("\"events\"").unwrap();
        assert_eq!(parsed, Category::Event);

        let parsed: Category = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Category::Announcement);
    }

    #[test]
    fn test_is_taxonomy() {
        assert!(Category::News.is_taxonomy());
        assert!(!Category::Other("Club".into()).is_taxonomy());
    }
}
