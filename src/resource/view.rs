//! Resource list view
//!
//! `ResourceListView<T, F>` owns one `ListResource<T>` and drives its fetch
//! lifecycle through a [`ResourceFetcher`]. Cloning the view clones a handle
//! to the same state, so a load can run on a spawned task while the host
//! keeps rendering.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;

use super::fetch::{join_endpoint, parse_items, ResourceFetcher};
use super::spec::ResourceSpec;
use super::state::{ListResource, ResourceStatus};
use crate::render::{self, ViewTree};

/// What a single `load()` did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied and the view is Loaded
    Loaded { count: usize },
    /// The response was applied and the view is Failed
    Failed { message: String },
    /// The response was applied but another load is still outstanding
    Pending,
    /// The view was unmounted; nothing was applied
    Discarded,
}

/// A mounted resource view
pub struct ResourceListView<T, F: ?Sized> {
    spec: Arc<ResourceSpec<T>>,
    fetcher: Arc<F>,
    state: Arc<Mutex<ListResource<T>>>,
    mounted: Arc<AtomicBool>,
}

impl<T, F: ?Sized> Clone for ResourceListView<T, F> {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
            fetcher: Arc::clone(&self.fetcher),
            state: Arc::clone(&self.state),
            mounted: Arc::clone(&self.mounted),
        }
    }
}

impl<T, F> ResourceListView<T, F>
where
    T: DeserializeOwned + Clone + Send + 'static,
    F: ResourceFetcher + ?Sized,
{
    /// Mount a view in the Idle state. The endpoint is the configured path
    /// resolved against `base_url`.
    pub fn mount(spec: ResourceSpec<T>, fetcher: Arc<F>, base_url: &str) -> Self {
        let endpoint = join_endpoint(base_url, spec.path());
        tracing::debug!(resource = %spec.name(), %endpoint, "Mounting resource view");

        Self {
            state: Arc::new(Mutex::new(ListResource::new(spec.name(), endpoint))),
            spec: Arc::new(spec),
            fetcher,
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn spec(&self) -> &ResourceSpec<T> {
        &self.spec
    }

    /// Fetch the list and apply the result.
    ///
    /// The state lock is only held to flip the status before the request and
    /// to apply the response after it; never across the await.
    pub async fn load(&self) -> LoadOutcome {
        if !self.is_mounted() {
            tracing::debug!(resource = %self.spec.name(), "Skipping load on unmounted view");
            return LoadOutcome::Discarded;
        }

        let endpoint = {
            let mut state = self.lock();
            state.begin_load();
            state.endpoint().to_string()
        };

        tracing::debug!(resource = %self.spec.name(), %endpoint, "Fetching resource list");

        let result = match self.fetcher.fetch(&endpoint).await {
            Ok(body) => parse_items::<T>(&body),
            Err(e) => Err(e),
        };

        // Checked under the lock; `unmount` takes the same lock
        let mut state = self.lock();
        if !self.is_mounted() {
            tracing::warn!(
                resource = %self.spec.name(),
                "Discarding response for unmounted view"
            );
            return LoadOutcome::Discarded;
        }

        match state.complete(result) {
            ResourceStatus::Loaded => {
                let count = state.items().len();
                tracing::info!(resource = %self.spec.name(), count, "Resource list loaded");
                LoadOutcome::Loaded { count }
            }
            ResourceStatus::Failed => {
                let message = state.last_error().unwrap_or_default().to_string();
                tracing::warn!(resource = %self.spec.name(), error = %message, "Resource list failed");
                LoadOutcome::Failed { message }
            }
            _ => LoadOutcome::Pending,
        }
    }

    /// Same as `load`, offered after a failure
    pub async fn retry(&self) -> LoadOutcome {
        self.load().await
    }

    /// Same as `load`, offered on a loaded view
    pub async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    /// Render the current state
    pub fn render(&self) -> ViewTree {
        render::render(&*self.lock(), &self.spec)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ListResource<T> {
        self.lock().clone()
    }

    pub fn status(&self) -> ResourceStatus {
        self.lock().status()
    }

    /// Tear the view down. Responses still in flight will be dropped.
    pub fn unmount(&self) {
        let _state = self.lock();
        if self.mounted.swap(false, Ordering::SeqCst) {
            tracing::debug!(resource = %self.spec.name(), "Unmounted resource view");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, ListResource<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaderboardEntry;
    use crate::render::{ActionKind, Cell};
    use crate::resource::{FetchError, FetchResult};
    use crate::resources;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::{oneshot, Mutex as AsyncMutex};

    /// Replays canned responses in order and records requested endpoints
    struct ScriptedFetcher {
        responses: Mutex<VecDeque<FetchResult<String>>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(responses: Vec<FetchResult<String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResourceFetcher for ScriptedFetcher {
        async fn fetch(&self, endpoint: &str) -> FetchResult<String> {
            self.requests.lock().unwrap().push(endpoint.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no scripted response".to_string())))
        }
    }

    /// Each fetch waits until the test releases it
    struct GatedFetcher {
        gates: AsyncMutex<VecDeque<oneshot::Receiver<FetchResult<String>>>>,
    }

    #[async_trait]
    impl ResourceFetcher for GatedFetcher {
        async fn fetch(&self, _endpoint: &str) -> FetchResult<String> {
            let gate = self.gates.lock().await.pop_front();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".to_string()))),
                None => Err(FetchError::Network("no gate".to_string())),
            }
        }
    }

    const LEADERBOARD: &str =
        r#"[{"name":"Ada","score":950},{"name":"Bo","score":800},{"name":"Cy","score":700}]"#;

    fn leaderboard_view(
        fetcher: Arc<ScriptedFetcher>,
    ) -> ResourceListView<LeaderboardEntry, ScriptedFetcher> {
        ResourceListView::mount(resources::leaderboard(), fetcher, "http://api.test/api/")
    }

    #[tokio::test]
    async fn test_mount_is_idle_with_resolved_endpoint() {
        let view = leaderboard_view(ScriptedFetcher::new(vec![]));
        let state = view.snapshot();

        assert_eq!(state.status(), ResourceStatus::Idle);
        assert_eq!(state.endpoint(), "http://api.test/api/leaderboard/");
        assert!(view.render().is_loading());
    }

    #[tokio::test]
    async fn test_load_success_preserves_order() {
        let fetcher = ScriptedFetcher::new(vec![Ok(LEADERBOARD.to_string())]);
        let view = leaderboard_view(Arc::clone(&fetcher));

        let outcome = view.load().await;

        assert_eq!(outcome, LoadOutcome::Loaded { count: 3 });
        let state = view.snapshot();
        assert_eq!(state.status(), ResourceStatus::Loaded);
        let names: Vec<_> = state.items().iter().map(|e| e.display_name()).collect();
        assert_eq!(names, vec![Some("Ada"), Some("Bo"), Some("Cy")]);
        assert_eq!(state.last_error(), None);
        assert_eq!(fetcher.requests(), vec!["http://api.test/api/leaderboard/"]);
    }

    #[tokio::test]
    async fn test_http_error_keeps_prior_items() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(LEADERBOARD.to_string()),
            Err(FetchError::http_status(502, Some("Bad Gateway"))),
        ]);
        let view = leaderboard_view(fetcher);

        view.load().await;
        let before = view.snapshot().items().to_vec();
        let outcome = view.refresh().await;

        assert_eq!(
            outcome,
            LoadOutcome::Failed {
                message: "Failed to fetch leaderboard: HTTP error! status: 502 - Bad Gateway"
                    .to_string()
            }
        );
        let state = view.snapshot();
        assert_eq!(state.status(), ResourceStatus::Failed);
        assert_eq!(state.items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_with_cause() {
        let fetcher = ScriptedFetcher::new(vec![Err(FetchError::Network(
            "error sending request: Connection refused (os error 111)".to_string(),
        ))]);
        let view = leaderboard_view(fetcher);

        view.load().await;

        let state = view.snapshot();
        assert_eq!(state.status(), ResourceStatus::Failed);
        assert!(state.items().is_empty());
        assert!(state.last_error().unwrap().contains("Connection refused"));

        let tree = view.render();
        assert_eq!(tree.retry_action().map(|a| a.kind), Some(ActionKind::Retry));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let fetcher = ScriptedFetcher::new(vec![Ok(r#"{"detail": "nope"}"#.to_string())]);
        let view = leaderboard_view(fetcher);

        match view.load().await {
            LoadOutcome::Failed { message } => {
                assert!(message.contains("Parse error: expected a JSON array"))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retry_after_failure_matches_fresh_load() {
        let retried = leaderboard_view(ScriptedFetcher::new(vec![
            Err(FetchError::http_status(500, None)),
            Ok(LEADERBOARD.to_string()),
        ]));
        retried.load().await;
        assert_eq!(retried.status(), ResourceStatus::Failed);
        retried.retry().await;

        let fresh = leaderboard_view(ScriptedFetcher::new(vec![Ok(LEADERBOARD.to_string())]));
        fresh.load().await;

        assert_eq!(retried.snapshot(), fresh.snapshot());
        assert_eq!(retried.render(), fresh.render());
    }

    #[tokio::test]
    async fn test_leaderboard_scenario_renders_ranking() {
        let view = leaderboard_view(ScriptedFetcher::new(vec![Ok(LEADERBOARD.to_string())]));
        view.load().await;

        let tree = view.render();
        let listing = tree.listing().expect("populated");
        let rows = &listing.table.rows;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].cells[1], Cell::strong("Ada"));
        assert_eq!(rows[0].cells[2], Cell::strong("950 pts"));
        assert_eq!(rows[1].cells[1], Cell::strong("Bo"));
        assert_eq!(rows[1].cells[2], Cell::strong("800 pts"));
        assert_eq!(rows[2].cells[1], Cell::strong("Cy"));
        assert_eq!(rows[2].cells[2], Cell::strong("700 pts"));
        assert_eq!(
            rows[0].cells[4],
            Cell::Progress {
                percent: 95.0,
                label: "95%".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_response_after_unmount_is_discarded() {
        let (tx, rx) = oneshot::channel();
        let fetcher = Arc::new(GatedFetcher {
            gates: AsyncMutex::new(VecDeque::from(vec![rx])),
        });
        let view = ResourceListView::mount(resources::leaderboard(), fetcher, "http://api.test/api");

        let task = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });

        // Let the load reach the await point
        while view.status() != ResourceStatus::Loading {
            tokio::task::yield_now().await;
        }
        view.unmount();
        tx.send(Ok(LEADERBOARD.to_string())).unwrap();

        assert_eq!(task.await.unwrap(), LoadOutcome::Discarded);
        assert!(view.snapshot().items().is_empty());
        assert_eq!(view.load().await, LoadOutcome::Discarded);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unmount_while_response_waits_for_state_is_discarded() {
        let (tx, rx) = oneshot::channel();
        let fetcher = Arc::new(GatedFetcher {
            gates: AsyncMutex::new(VecDeque::from(vec![rx])),
        });
        let view = ResourceListView::mount(resources::leaderboard(), fetcher, "http://api.test/api");

        let task = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });
        while view.status() != ResourceStatus::Loading {
            tokio::task::yield_now().await;
        }

        // The response arrives while the state is held, then the view goes away
        let guard = view.lock();
        tx.send(Ok(LEADERBOARD.to_string())).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(50));
        view.mounted.store(false, Ordering::SeqCst);
        drop(guard);

        assert_eq!(task.await.unwrap(), LoadOutcome::Discarded);
        let state = view.snapshot();
        assert_eq!(state.status(), ResourceStatus::Loading);
        assert!(state.items().is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_loads_last_response_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let fetcher = Arc::new(GatedFetcher {
            gates: AsyncMutex::new(VecDeque::from(vec![first_rx, second_rx])),
        });
        let view = ResourceListView::mount(resources::leaderboard(), fetcher, "http://api.test/api");

        let first = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });
        while view.snapshot().in_flight() < 1 {
            tokio::task::yield_now().await;
        }
        let second = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });
        while view.snapshot().in_flight() < 2 {
            tokio::task::yield_now().await;
        }

        // The second request resolves first, the first one last
        second_tx.send(Ok(LEADERBOARD.to_string())).unwrap();
        assert_eq!(second.await.unwrap(), LoadOutcome::Pending);
        assert_eq!(view.status(), ResourceStatus::Loading);

        first_tx.send(Ok(r#"[{"name":"Zed","score":10}]"#.to_string())).unwrap();
        assert_eq!(first.await.unwrap(), LoadOutcome::Loaded { count: 1 });

        let state = view.snapshot();
        assert_eq!(state.status(), ResourceStatus::Loaded);
        assert_eq!(state.items()[0].display_name(), Some("Zed"));
    }
}
