//! Error types and handling for the `MapMind` services
//!
//! Every operation failure is local and recoverable: errors carry the
//! hints a caller needs (valid keys, valid enum values) and convert to
//! the uniform `{success: false, error, ...}` envelope instead of
//! terminating anything.

use serde_json::{Value, json};
use thiserror::Error;

/// Main error type for the `MapMind` services
#[derive(Error, Debug)]
pub enum MapMindError {
    /// Location key missed both exact and fuzzy lookup
    #[error("Location '{query}' not found")]
    LocationNotFound {
        query: String,
        available: Vec<String>,
        /// Optional human hint naming a few known-good keys
        suggestion: Option<String>,
    },

    /// No route edge exists between two place names
    #[error("No routes found between '{origin}' and '{destination}'")]
    NoRouteAvailable {
        origin: String,
        destination: String,
        available: Vec<String>,
    },

    /// Named route option absent from a known edge
    #[error("Route '{name}' not found")]
    RouteOptionNotFound { name: String, available: Vec<String> },

    /// Parameter outside its enumerated set (emotion, mode, resort)
    #[error("Invalid {parameter} '{given}'")]
    InvalidParameter {
        parameter: &'static str,
        given: String,
        valid: Vec<String>,
    },

    /// Outbound fetch failures (timeout, bad URL, HTTP status)
    #[error("Fetch error: {message}")]
    Fetch {
        message: String,
        url: String,
        status_code: Option<u16>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("{message}")]
    General { message: String },
}

impl MapMindError {
    /// Create a location-not-found error carrying the valid key list
    pub fn location_not_found<S: Into<String>>(query: S, available: Vec<String>) -> Self {
        Self::LocationNotFound {
            query: query.into(),
            available,
            suggestion: None,
        }
    }

    /// Location-not-found with a human hint naming known-good keys
    pub fn location_not_found_with_hint<S: Into<String>, H: Into<String>>(
        query: S,
        available: Vec<String>,
        suggestion: H,
    ) -> Self {
        Self::LocationNotFound {
            query: query.into(),
            available,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create an invalid-parameter error carrying the valid value set
    pub fn invalid_parameter<S: Into<String>>(
        parameter: &'static str,
        given: S,
        valid: Vec<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            given: given.into(),
            valid,
        }
    }

    /// Create a fetch error without an HTTP status
    pub fn fetch<S: Into<String>, U: Into<String>>(message: S, url: U) -> Self {
        Self::Fetch {
            message: message.into(),
            url: url.into(),
            status_code: None,
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Convert into the uniform failure envelope, including the
    /// recovery hints callers rely on.
    #[must_use]
    pub fn envelope(&self) -> Value {
        match self {
            MapMindError::LocationNotFound {
                available,
                suggestion,
                ..
            } => {
                let mut body = json!({
                    "success": false,
                    "error": self.to_string(),
                    "available_locations": available,
                });
                if let Some(hint) = suggestion {
                    body["suggestion"] = json!(hint);
                }
                body
            }
            MapMindError::NoRouteAvailable { available, .. } => json!({
                "success": false,
                "error": self.to_string(),
                "available_routes": available,
            }),
            MapMindError::RouteOptionNotFound { available, .. } => json!({
                "success": false,
                "error": self.to_string(),
                "available_routes": available,
            }),
            MapMindError::InvalidParameter {
                parameter, valid, ..
            } => {
                let mut body = json!({
                    "success": false,
                    "error": self.to_string(),
                });
                body[format!("valid_{parameter}s")] = json!(valid);
                body
            }
            MapMindError::Fetch {
                url, status_code, ..
            } => {
                let mut body = json!({
                    "success": false,
                    "error": self.to_string(),
                    "url": url,
                });
                if let Some(code) = status_code {
                    body["status_code"] = json!(code);
                }
                body
            }
            _ => json!({
                "success": false,
                "error": self.to_string(),
            }),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            MapMindError::LocationNotFound { query, .. } => {
                format!("'{query}' is not in the catalog. Check available_locations for valid keys.")
            }
            MapMindError::NoRouteAvailable {
                origin,
                destination,
                ..
            } => {
                format!("No route data between '{origin}' and '{destination}'.")
            }
            MapMindError::RouteOptionNotFound { name, .. } => {
                format!("Route option '{name}' does not exist on this connection.")
            }
            MapMindError::InvalidParameter {
                parameter, given, ..
            } => {
                format!("'{given}' is not a recognized {parameter}.")
            }
            MapMindError::Fetch { .. } => {
                "Unable to fetch the requested content. Check the URL and try again.".to_string()
            }
            MapMindError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            MapMindError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            MapMindError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = MapMindError::location_not_found("Atlantis", vec!["Beirut".to_string()]);
        assert!(matches!(not_found, MapMindError::LocationNotFound { .. }));

        let invalid = MapMindError::invalid_parameter("emotion", "anger", vec!["joy".to_string()]);
        assert!(matches!(invalid, MapMindError::InvalidParameter { .. }));

        let config_err = MapMindError::config("missing port");
        assert!(matches!(config_err, MapMindError::Config { .. }));
    }

    #[test]
    fn test_envelope_carries_hints() {
        let err = MapMindError::location_not_found(
            "Atlantis",
            vec!["Beirut".to_string(), "Byblos".to_string()],
        );
        let body = err.envelope();
        assert_eq!(body["success"], false);
        assert_eq!(body["available_locations"][1], "Byblos");

        let err = MapMindError::invalid_parameter("emotion", "anger", vec!["joy".to_string()]);
        let body = err.envelope();
        assert_eq!(body["valid_emotions"][0], "joy");

        let err = MapMindError::location_not_found_with_hint(
            "Atlantis",
            vec!["Berlin".to_string()],
            "Try 'Berlin'",
        );
        let body = err.envelope();
        assert_eq!(body["suggestion"], "Try 'Berlin'");
    }

    #[test]
    fn test_user_messages() {
        let err = MapMindError::location_not_found("Atlantis", vec![]);
        assert!(err.user_message().contains("Atlantis"));

        let err = MapMindError::fetch("timed out", "http://example.com");
        assert!(err.user_message().contains("fetch"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MapMindError = io_err.into();
        assert!(matches!(err, MapMindError::Io { .. }));
    }
}
