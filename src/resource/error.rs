//! Fetch error types
//!
//! The three ways a list fetch can fail. All of them end a load cycle in
//! the Failed status; only the message text differs.

use thiserror::Error;

/// Errors that can occur while fetching a resource list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived with a non-success status code
    #[error("HTTP error! status: {status}{}", reason_suffix(.reason))]
    HttpStatus { status: u16, reason: Option<String> },

    /// The body was not valid JSON, or not a JSON array
    #[error("Parse error: {0}")]
    Parse(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!(" - {}", reason),
        _ => String::new(),
    }
}

impl FetchError {
    pub fn http_status(status: u16, reason: Option<&str>) -> Self {
        FetchError::HttpStatus {
            status,
            reason: reason.map(str::to_string),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::http_status(500, Some("Internal Server Error"));
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 500 - Internal Server Error"
        );

        let err = FetchError::http_status(404, None);
        assert_eq!(err.to_string(), "HTTP error! status: 404");

        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
