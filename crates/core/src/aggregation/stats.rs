//! Build statistics

use std::collections::BTreeMap;

use campuscal_domain::impl_domain_tag_conversions;
use serde::{Deserialize, Serialize};

/// Why a record (or one of its days) did not reach the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Post tagged as a bulk spreadsheet import
    BulkImport,
    /// Neither `category` nor `type` present
    MissingCategory,
    /// Normalization produced an empty category
    EmptyCategory,
    /// Calendar event whose category is not selected
    NotSelected,
    /// No candidate date string parsed
    UnparseableDate,
    /// Range whose end precedes its start
    InvertedRange,
    /// Week/month placeholder without a usable year and month
    InvalidPlaceholderMonth,
}

impl_domain_tag_conversions!(DropReason {
    BulkImport => "bulk_import",
    MissingCategory => "missing_category",
    EmptyCategory => "empty_category",
    NotSelected => "not_selected",
    UnparseableDate => "unparseable_date",
    InvertedRange => "inverted_range",
    InvalidPlaceholderMonth => "invalid_placeholder_month",
});

/// Which duplicate rule suppressed an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRule {
    /// Same non-empty identifier
    Identifier,
    /// Same `(source, title, day)`
    CompositeKey,
    /// Same source, title, day and category
    FieldMatch,
}

impl_domain_tag_conversions!(DuplicateRule {
    Identifier => "identifier",
    CompositeKey => "composite_key",
    FieldMatch => "field_match",
});

/// Counters collected while folding one build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Day-cell entries inserted
    pub day_entries: usize,
    /// Week/month placeholders counted
    pub placeholders: usize,
    /// Ranges reduced to their boundary days
    pub collapsed_ranges: usize,
    /// Suppressed duplicates, by rule
    pub duplicates: BTreeMap<DuplicateRule, usize>,
    /// Dropped records, by reason
    pub drops: BTreeMap<DropReason, usize>,
}

impl BuildStats {
    pub fn record_drop(&mut self, reason: DropReason) {
        *self.drops.entry(reason).or_default() += 1;
    }

    pub fn record_duplicate(&mut self, rule: DuplicateRule) {
        *self.duplicates.entry(rule).or_default() += 1;
    }

    #[must_use]
    pub fn dropped(&self, reason: DropReason) -> usize {
        self.drops.get(&reason).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total_dropped(&self) -> usize {
        self.drops.values().sum()
    }

    #[must_use]
    pub fn duplicates_suppressed(&self) -> usize {
        self.duplicates.values().sum()
    }
}
