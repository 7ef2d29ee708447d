//! Lenient serde helpers for heterogeneous source records
//!
//! Upstream feeds are inconsistent about scalar types: identifiers arrive as
//! strings or numbers, `year`/`month` as numbers or numeric strings. These
//! helpers accept any scalar and never fail the surrounding document; a value
//! that cannot be coerced becomes `None`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(serde::de::IgnoredAny),
}

impl LooseScalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(_) | Self::Other(_) => None,
        }
    }

    fn into_int(self) -> Option<i64> {
        match self {
            Self::Text(s) => s.trim().parse().ok(),
            Self::Int(n) => Some(n),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(f as i64),
            Self::Float(_) | Self::Bool(_) | Self::Other(_) => None,
        }
    }

    fn into_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" | "" => Some(false),
                _ => None,
            },
            Self::Int(n) => Some(n != 0),
            Self::Float(_) | Self::Other(_) => None,
        }
    }
}

/// Deserialize any scalar (or null) into an optional string.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.and_then(LooseScalar::into_text))
}

/// Deserialize a number or numeric string (or null) into an optional integer.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.and_then(LooseScalar::into_int))
}

/// Deserialize a boolean-ish scalar (or null) into an optional bool.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.and_then(LooseScalar::into_bool))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "super::opt_string")]
        id: Option<String>,
        #[serde(deserialize_with = "super::opt_int")]
        year: Option<i64>,
        #[serde(deserialize_with = "super::opt_bool")]
        flag: Option<bool>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        assert_eq!(probe(r#"{"id": 42}"#).id.as_deref(), Some("42"));
        assert_eq!(probe(r#"{"id": "abc"}"#).id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_year_accepts_numeric_string() {
        assert_eq!(probe(r#"{"year": "2024"}"#).year, Some(2024));
        assert_eq!(probe(r#"{"year": 2024}"#).year, Some(2024));
        assert_eq!(probe(r#"{"year": 2024.0}"#).year, Some(2024));
        assert_eq!(probe(r#"{"year": "soon"}"#).year, None);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let p = probe(r#"{"id": null, "year": null}"#);
        assert!(p.id.is_none());
        assert!(p.year.is_none());
        assert!(probe("{}").flag.is_none());
    }

    #[test]
    fn test_nested_values_do_not_fail_document() {
        let p = probe(r#"{"id": {"$oid": "x"}, "year": [2024], "flag": "true"}"#);
        assert!(p.id.is_none());
        assert!(p.year.is_none());
        assert_eq!(p.flag, Some(true));
    }
}
