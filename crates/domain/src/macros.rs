//! Macro for implementing Display and FromStr for tag enums
//!
//! Item sources and log formats travel as short lowercase tags in JSON and
//! environment variables. This macro generates both conversions from one
//! variant-to-tag table so the two directions cannot drift apart.
//!
//! # Example
//!
//! ```rust
//! use campuscal_domain::impl_domain_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum FeedOrigin {
//!     Post,
//!     Calendar,
//! }
//!
//! impl_domain_tag_conversions!(FeedOrigin {
//!     Post => "post",
//!     Calendar => "calendar",
//! });
//!
//! assert_eq!(FeedOrigin::Calendar.to_string(), "calendar");
//! assert_eq!("POST".parse::<FeedOrigin>(), Ok(FeedOrigin::Post));
//! ```

/// Implements Display and FromStr traits for tag enums
///
/// - Display writes the tag exactly as listed
/// - FromStr matches case-insensitively and reports the enum name on failure
/// - Paths are fully qualified, so caller-side aliases such as a one-parameter
///   `Result` do not leak into the expansion
#[macro_export]
macro_rules! impl_domain_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FeedKind {
        Bulletin,
        Calendar,
        Digest,
    }

    impl_domain_tag_conversions!(FeedKind {
        Bulletin => "bulletin",
        Calendar => "calendar",
        Digest => "digest",
    });

    #[test]
    fn test_display_is_lowercase_tag() {
        assert_eq!(FeedKind::Bulletin.to_string(), "bulletin");
        assert_eq!(FeedKind::Digest.to_string(), "digest");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(FeedKind::from_str("CALENDAR").unwrap(), FeedKind::Calendar);
        assert_eq!(FeedKind::from_str("Bulletin").unwrap(), FeedKind::Bulletin);
    }

    #[test]
    fn test_fromstr_rejects_unknown_tag() {
        let err = FeedKind::from_str("newsletter").unwrap_err();
        assert!(err.contains("Invalid FeedKind: newsletter"));
        assert!(FeedKind::from_str("").is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for kind in [FeedKind::Bulletin, FeedKind::Calendar, FeedKind::Digest] {
            assert_eq!(FeedKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}
