//! Category selection filter

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Set of lowercase category names the caller wants to see.
///
/// Only calendar events are filtered by this set; posts pass regardless.
/// Names are lower-cased on insertion, so `"Academic"` and `"academic"` are
/// the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryFilter {
    names: HashSet<String>,
}

impl CategoryFilter {
    /// Empty filter: every calendar event is excluded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter selecting the whole fixed taxonomy.
    #[must_use]
    pub fn taxonomy() -> Self {
        Category::TAXONOMY.iter().map(Category::filter_key).collect()
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.trim().to_ascii_lowercase());
    }

    #[must_use]
    pub fn allows(&self, category: &Category) -> bool {
        self.names.contains(&category.filter_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in sorted order (stable across runs).
    #[must_use]
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = Self::new();
        for name in iter {
            filter.insert(name.as_ref());
        }
        filter
    }
}

impl From<Vec<String>> for CategoryFilter {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<CategoryFilter> for Vec<String> {
    fn from(filter: CategoryFilter) -> Self {
        filter.sorted_names()
    }
}
