//! Per-day indicator resolution
//!
//! A day cell shows one color per distinct category present that day,
//! ordered by category priority with ties broken by name. The result is a
//! pure function of the day's category *set*; [`IndicatorMemo`] exploits
//! that to skip recomputation when a cell re-renders with the same set.

use ahash::AHashSet;
use campuscal_domain::{Category, Indicators, NormalizedItem};

use super::mapping::indicator_style;

/// Order-independent identity of a day's category set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySetKey(Vec<String>);

impl CategorySetKey {
    #[must_use]
    pub fn from_items(items: &[NormalizedItem]) -> Self {
        let mut names: Vec<String> =
            distinct_categories(items).into_iter().map(|c| c.as_str().to_string()).collect();
        names.sort_unstable();
        Self(names)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn distinct_categories(items: &[NormalizedItem]) -> Vec<&Category> {
    let unique: AHashSet<&Category> = items.iter().map(|item| &item.category).collect();
    unique.into_iter().collect()
}

/// Resolve the ordered indicator colors for one day's items.
///
/// Duplicate categories collapse to one indicator; an empty day yields
/// empty indicators.
#[must_use]
pub fn indicators_for(items: &[NormalizedItem]) -> Indicators {
    let mut styled: Vec<_> = distinct_categories(items)
        .into_iter()
        .map(|category| (indicator_style(category), category.as_str()))
        .collect();
    styled.sort_by(|(a, a_name), (b, b_name)| {
        a.priority.cmp(&b.priority).then_with(|| a_name.cmp(b_name))
    });

    Indicators {
        unique_count: styled.len(),
        colors: styled.into_iter().map(|(style, _)| style.color).collect(),
    }
}

/// Single-slot memo of the last resolved category set
#[derive(Debug, Default)]
pub struct IndicatorMemo {
    cached: Option<(CategorySetKey, Indicators)>,
    recomputations: usize,
}

impl IndicatorMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicators for `items`, recomputed only when the category set changed
    /// since the previous call.
    pub fn resolve(&mut self, items: &[NormalizedItem]) -> &Indicators {
        let key = CategorySetKey::from_items(items);
        let entry = match self.cached.take() {
            Some((cached_key, indicators)) if cached_key == key => (cached_key, indicators),
            _ => {
                self.recomputations += 1;
                (key, indicators_for(items))
            }
        };
        &self.cached.insert(entry).1
    }

    /// Number of times indicators were actually recomputed.
    #[must_use]
    pub const fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use campuscal_domain::constants::{
        COLOR_ACADEMIC, COLOR_FALLBACK, COLOR_INSTITUTIONAL, COLOR_NEWS,
    };
    use campuscal_domain::{ItemSource, IndicatorColor};

    use super::*;

    fn item(title: &str, category: Category) -> NormalizedItem {
        NormalizedItem {
            id: None,
            title: title.to_string(),
            date_key: "2024-06-03".parse().unwrap(),
            color: IndicatorColor::from_static(COLOR_FALLBACK),
            category,
            source: ItemSource::Calendar,
            time: None,
            description: None,
            range: None,
            is_pinned: false,
            is_urgent: false,
        }
    }

    fn colors(indicators: &Indicators) -> Vec<&str> {
        indicators.colors.iter().map(IndicatorColor::as_str).collect()
    }

    #[test]
    fn test_orders_by_priority() {
        let items = [
            item("a", Category::News),
            item("b", Category::Academic),
            item("c", Category::Institutional),
        ];
        let indicators = indicators_for(&items);
        assert_eq!(colors(&indicators), [COLOR_INSTITUTIONAL, COLOR_ACADEMIC, COLOR_NEWS]);
        assert_eq!(indicators.unique_count, 3);
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let items = [item("a", Category::Academic), item("b", Category::Academic)];
        let indicators = indicators_for(&items);
        assert_eq!(colors(&indicators), [COLOR_ACADEMIC]);
        assert_eq!(indicators.unique_count, 1);
    }

    #[test]
    fn test_pass_through_ties_break_by_name() {
        let items = [
            item("a", Category::Other("Sports".into())),
            item("b", Category::Other("Alumni".into())),
            item("c", Category::News),
        ];
        let indicators = indicators_for(&items);
        assert_eq!(indicators.unique_count, 3);
        assert_eq!(colors(&indicators)[0], COLOR_NEWS);
        assert_eq!(CategorySetKey::from_items(&items).len(), 3);
    }

    #[test]
    fn test_empty_day_has_no_indicators() {
        let indicators = indicators_for(&[]);
        assert!(indicators.is_empty());
        assert_eq!(indicators.unique_count, 0);
        assert!(CategorySetKey::from_items(&[]).is_empty());
    }

    #[test]
    fn test_set_key_ignores_order_and_multiplicity() {
        let a = [item("a", Category::News), item("b", Category::Academic)];
        let b = [
            item("x", Category::Academic),
            item("y", Category::News),
            item("z", Category::News),
        ];
        assert_eq!(CategorySetKey::from_items(&a), CategorySetKey::from_items(&b));
    }

    #[test]
    fn test_memo_recomputes_only_on_set_change() {
        let mut memo = IndicatorMemo::new();
        let monday = [item("a", Category::News), item("b", Category::Academic)];
        let tuesday = [item("c", Category::Academic), item("d", Category::News)];
        let wednesday = [item("e", Category::Event)];

        let first = memo.resolve(&monday).clone();
        let second = memo.resolve(&tuesday).clone();
        assert_eq!(first, second);
        assert_eq!(memo.recomputations(), 1);

        memo.resolve(&wednesday);
        assert_eq!(memo.recomputations(), 2);
    }
}
