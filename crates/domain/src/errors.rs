//! Error types used throughout the workspace
//!
//! The aggregation engine itself never fails on heterogeneous input; these
//! errors only surface from the edges (key parsing, configuration).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for CampusCal
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CampusCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CampusCalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for CampusCal operations
pub type Result<T> = std::result::Result<T, CampusCalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let err = CampusCalError::Config("bad zone".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad zone");
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = CampusCalError::InvalidInput("2024-13-01".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["message"], "2024-13-01");
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CampusCalError = parse_err.into();
        assert!(matches!(err, CampusCalError::Serialization(_)));
    }
}
