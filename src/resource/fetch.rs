//! Fetching
//!
//! The `ResourceFetcher` seam between a view and the transport, plus the
//! body parsing and endpoint helpers every host shares.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{FetchError, FetchResult};

/// Transport for resource lists.
///
/// Implementations issue one `GET` and return the raw body of a successful
/// response. Connection problems map to [`FetchError::Network`] and
/// non-success codes to [`FetchError::HttpStatus`]; body parsing happens in
/// [`parse_items`].
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, endpoint: &str) -> FetchResult<String>;
}

/// Parse a response body into an ordered list of items.
///
/// The body must be a JSON array of objects. Order is preserved. Fields
/// inside an object are read leniently, but an element that is not an
/// object at all (a number, a string, `null`) fails the whole list.
pub fn parse_items<T: DeserializeOwned>(body: &str) -> FetchResult<Vec<T>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid JSON: {}", e)))?;

    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| FetchError::Parse(format!("unexpected item shape: {}", e))),
        other => Err(FetchError::Parse(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolve a resource path against the API base URL.
///
/// Trailing slashes on the base and leading slashes on the path are
/// normalized so that exactly one separator remains.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    #[test]
    fn test_parse_preserves_order() {
        let items: Vec<Activity> = parse_items(
            r#"[{"type": "Cycling"}, {"type": "Running"}, {"type": "Swimming"}]"#,
        )
        .unwrap();

        let types: Vec<_> = items.iter().map(|a| a.activity_type.as_deref()).collect();
        assert_eq!(types, vec![Some("Cycling"), Some("Running"), Some("Swimming")]);
    }

    #[test]
    fn test_parse_empty_array() {
        let items: Vec<Activity> = parse_items("[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_items::<Activity>("<html>oops</html>").unwrap_err();
        match err {
            FetchError::Parse(msg) => assert!(msg.starts_with("invalid JSON")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_items::<Activity>(r#"{"results": []}"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::Parse("expected a JSON array, got an object".to_string())
        );
    }

    #[test]
    fn test_parse_odd_objects_survive_non_objects_fail() {
        let items: Vec<Activity> =
            parse_items(r#"[{"type": 7, "duration": null}, {}, {"type": "Yoga"}]"#).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].activity_type.as_deref(), Some("Yoga"));

        let err = parse_items::<Activity>(r#"[{"type": "Run"}, 5, null]"#).unwrap_err();
        match err {
            FetchError::Parse(msg) => assert!(msg.starts_with("unexpected item shape")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_join_endpoint() {
        assert_eq!(
            join_endpoint("http://localhost:8000/api/", "/activities/"),
            "http://localhost:8000/api/activities/"
        );
        assert_eq!(
            join_endpoint("http://localhost:8000/api", "users/"),
            "http://localhost:8000/api/users/"
        );
        assert_eq!(join_endpoint("http://host/api/", ""), "http://host/api");
    }
}
