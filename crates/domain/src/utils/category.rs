//! Category normalization
//!
//! Maps arbitrary raw category/type strings onto the fixed taxonomy. Unknown
//! names pass through in a canonical casing so forward-compatible categories
//! never break aggregation.

use crate::types::Category;

/// Normalize a raw category string.
///
/// Rules, in order:
/// 1. Absent or blank input yields `Announcement`.
/// 2. Known singular/plural spellings match case-insensitively.
/// 3. Anything else is passed through with its first letter upper-cased and
///    the remainder lower-cased (ASCII folding only).
///
/// Canonical outputs are fixed points, so normalizing twice is a no-op.
///
/// # Examples
///
/// ```
/// use campuscal_domain::utils::category::normalize_category;
/// use campuscal_domain::Category;
///
/// assert_eq!(normalize_category(Some("EVENTS")), Category::Event);
/// assert_eq!(normalize_category(Some("new")), Category::News);
/// assert_eq!(normalize_category(None), Category::Announcement);
/// assert_eq!(normalize_category(Some("sPORTS")), Category::Other("Sports".into()));
/// ```
#[must_use]
pub fn normalize_category(raw: Option<&str>) -> Category {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Category::Announcement;
    };

    match trimmed.to_ascii_lowercase().as_str() {
        "event" | "events" => Category::Event,
        "announcement" | "announcements" => Category::Announcement,
        "academic" | "academics" => Category::Academic,
        "institutional" | "institutionals" => Category::Institutional,
        "news" | "new" => Category::News,
        _ => Category::Other(capitalize_ascii(trimmed)),
    }
}

fn capitalize_ascii(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(input.len());
        out.push(first.to_ascii_uppercase());
        out.push_str(&chars.as_str().to_ascii_lowercase());
        out
    })
}
