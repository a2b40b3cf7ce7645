//! Error types for the TVDB client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the TVDB client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Required configuration value is missing or blank
    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Name of the field or environment variable
        field: String,
    },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// No usable bearer token
    #[error("Authentication failed: {message}")]
    Auth {
        /// What was wrong
        message: String,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport failure (connection, DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response status other than 200
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body as text
        body: String,
    },

    /// Text response with no body
    #[error("Empty response body (HTTP {status})")]
    EmptyBody {
        /// Status code
        status: u16,
    },

    /// "404 Not Found" page served with a success status
    #[error("Remote service returned a not-found page (HTTP {status})")]
    NotFoundPage {
        /// Status code
        status: u16,
    },

    /// Base URL or request path does not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    /// Application error reported in the response's `Error` field
    #[error("Remote error: {message}")]
    Remote {
        /// Message reported by the service
        message: String,
        /// Status code of the response carrying it
        status: Option<u16>,
    },

    /// Remote id matched by no provider recognizer
    #[error("No remote provider recognizes id '{id}'")]
    UnknownRemoteProvider {
        /// The rejected id
        id: String,
    },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    /// JSON body could not be parsed
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Parser message
        message: String,
    },

    /// XML body could not be parsed
    #[error("XML parsing error: {message}")]
    XmlParse {
        /// Parser message
        message: String,
    },

    /// Body is not a readable ZIP archive
    #[error("Failed to open ZIP archive: {message}")]
    ZipArchive {
        /// Archive reader message
        message: String,
    },

    /// Archive lacks the `<language>.xml` entry
    #[error("ZIP archive has no entry named '{entry}'")]
    MissingZipEntry {
        /// Name of the missing entry
        entry: String,
    },

    /// Decoded document does not fit the record type
    #[error("Failed to map response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a remote error
    pub fn remote(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Remote {
            message: message.into(),
            status,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an XML parse error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// HTTP status code associated with this error, if one is known
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::HttpStatus { status, .. }
            | Error::EmptyBody { status }
            | Error::NotFoundPage { status } => Some(*status),
            Error::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias for the TVDB client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::MissingZipEntry {
            entry: "fr.xml".to_string(),
        };
        assert_eq!(err.to_string(), "ZIP archive has no entry named 'fr.xml'");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::http_status(503, "").status_code(), Some(503));
        assert_eq!(Error::EmptyBody { status: 200 }.status_code(), Some(200));
        assert_eq!(Error::NotFoundPage { status: 200 }.status_code(), Some(200));
        assert_eq!(Error::remote("bad", Some(401)).status_code(), Some(401));
        assert_eq!(Error::remote("bad", None).status_code(), None);
        assert_eq!(Error::xml("broken").status_code(), None);
        assert_eq!(Error::config("x").status_code(), None);
    }
}
