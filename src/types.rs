//! Common types used throughout the client
//!
//! Shared enums and type aliases used by both API dialects.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Response Type
// ============================================================================

/// How a response body must be read and decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// JSON body, passed through as-is
    Json,
    /// XML body (default for the legacy API)
    #[default]
    Xml,
    /// ZIP archive holding `<language>.xml`
    Zip,
}

impl ResponseType {
    /// Whether the body must be read as raw bytes instead of text
    pub fn is_binary(self) -> bool {
        matches!(self, ResponseType::Zip)
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseType::Json => "json",
            ResponseType::Xml => "xml",
            ResponseType::Zip => "zip",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Update Interval
// ============================================================================

/// Window for the legacy update record files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateInterval {
    /// Last 24 hours
    #[default]
    Day,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Everything since the service started recording updates
    All,
}

impl UpdateInterval {
    /// Path segment used by the remote service
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateInterval::Day => "day",
            UpdateInterval::Week => "week",
            UpdateInterval::Month => "month",
            UpdateInterval::All => "all",
        }
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UpdateInterval {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(UpdateInterval::Day),
            "week" => Ok(UpdateInterval::Week),
            "month" => Ok(UpdateInterval::Month),
            "all" => Ok(UpdateInterval::All),
            other => Err(crate::Error::config(format!(
                "Unknown update interval '{other}' (expected day, week, month or all)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_type_default() {
        assert_eq!(ResponseType::default(), ResponseType::Xml);
        assert!(ResponseType::Zip.is_binary());
        assert!(!ResponseType::Xml.is_binary());
        assert!(!ResponseType::Json.is_binary());
    }

    #[test]
    fn test_update_interval_parse() {
        assert_eq!("week".parse::<UpdateInterval>().unwrap(), UpdateInterval::Week);
        assert_eq!("ALL".parse::<UpdateInterval>().unwrap(), UpdateInterval::All);
        assert!("year".parse::<UpdateInterval>().is_err());
        assert_eq!(UpdateInterval::Month.to_string(), "month");
    }
}
