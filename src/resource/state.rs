//! List resource state
//!
//! `ListResource<T>` is the whole state of one resource view: the endpoint,
//! the last received items, the fetch status and the last error. All status
//! transitions go through `begin_load` and `complete` so the invariants hold
//! no matter which host (CLI task or browser signal) drives the fetch.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::FetchError;

/// Fetch status of a resource view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Mounted, no fetch issued yet
    Idle,
    /// At least one fetch outstanding
    Loading,
    /// Last fetch cycle succeeded
    Loaded,
    /// Last fetch cycle failed
    Failed,
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceStatus::Idle => "idle",
            ResourceStatus::Loading => "loading",
            ResourceStatus::Loaded => "loaded",
            ResourceStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A named remote collection and its fetch lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct ListResource<T> {
    name: String,
    endpoint: String,
    items: Vec<T>,
    status: ResourceStatus,
    last_error: Option<String>,
    in_flight: usize,
}

impl<T> ListResource<T> {
    /// New resource in the Idle state with no items
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            items: Vec::new(),
            status: ResourceStatus::Idle,
            last_error: None,
            in_flight: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    /// Present only while the status is Failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of loads issued but not yet completed
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a fetch cycle: status becomes Loading and any error is cleared.
    /// Items are kept until a response replaces them.
    pub fn begin_load(&mut self) {
        self.in_flight += 1;
        self.status = ResourceStatus::Loading;
        self.last_error = None;
    }

    /// Apply the result of one fetch.
    ///
    /// A success replaces `items` wholesale. A failure never touches `items`.
    /// While other loads are still outstanding the status stays Loading and
    /// no error is exposed; the last response to resolve decides between
    /// Loaded and Failed.
    pub fn complete(&mut self, result: Result<Vec<T>, FetchError>) -> ResourceStatus {
        self.in_flight = self.in_flight.saturating_sub(1);

        let (settled, error) = match result {
            Ok(items) => {
                self.items = items;
                (ResourceStatus::Loaded, None)
            }
            Err(err) => (
                ResourceStatus::Failed,
                Some(format!("Failed to fetch {}: {}", self.name, err)),
            ),
        };

        if self.in_flight > 0 {
            self.status = ResourceStatus::Loading;
            self.last_error = None;
        } else {
            self.status = settled;
            self.last_error = error;
        }

        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> ListResource<u32> {
        ListResource::new("activities", "http://localhost:8000/api/activities/")
    }

    #[test]
    fn test_new_resource_is_idle_and_empty() {
        let res = resource();
        assert_eq!(res.status(), ResourceStatus::Idle);
        assert!(res.items().is_empty());
        assert_eq!(res.last_error(), None);
        assert_eq!(res.endpoint(), "http://localhost:8000/api/activities/");
    }

    #[test]
    fn test_success_replaces_items_wholesale() {
        let mut res = resource();
        res.begin_load();
        assert_eq!(res.status(), ResourceStatus::Loading);
        res.complete(Ok(vec![1, 2, 3]));

        res.begin_load();
        let status = res.complete(Ok(vec![9]));

        assert_eq!(status, ResourceStatus::Loaded);
        assert_eq!(res.items(), &[9]);
        assert_eq!(res.last_error(), None);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut res = resource();
        res.begin_load();
        res.complete(Ok(vec![1, 2]));

        res.begin_load();
        let status = res.complete(Err(FetchError::http_status(503, Some("Service Unavailable"))));

        assert_eq!(status, ResourceStatus::Failed);
        assert_eq!(res.items(), &[1, 2]);
        assert_eq!(
            res.last_error(),
            Some("Failed to fetch activities: HTTP error! status: 503 - Service Unavailable")
        );
    }

    #[test]
    fn test_begin_load_clears_error() {
        let mut res = resource();
        res.begin_load();
        res.complete(Err(FetchError::Network("connection refused".to_string())));
        assert!(res.last_error().is_some());

        res.begin_load();
        assert_eq!(res.status(), ResourceStatus::Loading);
        assert_eq!(res.last_error(), None);
    }

    #[test]
    fn test_overlapping_loads_settle_on_last_response() {
        let mut res = resource();
        res.begin_load();
        res.begin_load();
        assert_eq!(res.in_flight(), 2);

        // First response lands while the second is outstanding
        let status = res.complete(Err(FetchError::Parse("not an array".to_string())));
        assert_eq!(status, ResourceStatus::Loading);
        assert_eq!(res.last_error(), None);

        let status = res.complete(Ok(vec![4, 5]));
        assert_eq!(status, ResourceStatus::Loaded);
        assert_eq!(res.items(), &[4, 5]);
        assert_eq!(res.in_flight(), 0);
    }

    #[test]
    fn test_overlapping_loads_last_failure_wins() {
        let mut res = resource();
        res.begin_load();
        res.begin_load();

        res.complete(Ok(vec![7]));
        let status = res.complete(Err(FetchError::http_status(500, None)));

        assert_eq!(status, ResourceStatus::Failed);
        assert_eq!(res.items(), &[7]);
    }
}
