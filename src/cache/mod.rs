//! In-memory cache for the asset list.
//!
//! There is exactly one tracked resource, keyed by [`ASSETS_CACHE_KEY`].
//! The cache is owned by the UI thread; fetches run on a tokio runtime and
//! report back through a [`CompletionSink`], after which the owner calls
//! [`FetchCache::apply`].

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchCacheState, FetchFailure, FetchStatus, RequestId};

use std::sync::Arc;
use std::time::SystemTime;
use tokio::runtime::Handle;

use crate::assets::{Asset, AssetSource, FetchError};
use crate::ui::mvi::Reducer;

/// Cache key of the single asset list.
pub const ASSETS_CACHE_KEY: &str = "assets";

/// Result of one fetch, tagged with the request that produced it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub result: Result<Vec<Asset>, FetchError>,
}

/// Receives fetch outcomes from the runtime. Typically forwards them into the
/// UI event channel.
pub type CompletionSink = Arc<dyn Fn(FetchOutcome) + Send + Sync>;

pub struct FetchCache {
    state: FetchCacheState,
    source: Arc<dyn AssetSource>,
    runtime: Handle,
    sink: CompletionSink,
    last_request: u64,
}

impl FetchCache {
    pub fn new(source: Arc<dyn AssetSource>, runtime: Handle, sink: CompletionSink) -> Self {
        Self {
            state: FetchCacheState::default(),
            source,
            runtime,
            sink,
            last_request: 0,
        }
    }

    pub fn key(&self) -> &'static str {
        ASSETS_CACHE_KEY
    }

    /// Last good asset list and the current status. Never blocks.
    pub fn get_cached(&self) -> (&[Asset], FetchStatus) {
        (&self.state.assets, self.state.status)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.state.assets
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status
    }

    pub fn state(&self) -> &FetchCacheState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.state.status.is_fetching()
    }

    /// Starts a fetch unless one is already in flight.
    ///
    /// Returns the id of the new request, or `None` when the call was a no-op.
    pub fn refresh(&mut self) -> Option<RequestId> {
        if self.is_fetching() {
            tracing::debug!(key = ASSETS_CACHE_KEY, "Refresh ignored, fetch already in flight");
            return None;
        }

        self.last_request += 1;
        let request = RequestId(self.last_request);
        self.dispatch(FetchIntent::Started { request });
        tracing::info!(
            key = ASSETS_CACHE_KEY,
            request = request.0,
            endpoint = self.source.endpoint(),
            "Fetching assets"
        );

        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);
        // A panicking source still yields a completion, so `in_flight` clears.
        let fetch = self.runtime.spawn(async move { source.fetch_assets().await });
        self.runtime.spawn(async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!(
                        key = ASSETS_CACHE_KEY,
                        request = request.0,
                        error = %err,
                        "Fetch task did not complete"
                    );
                    Err(FetchError::Task(err))
                }
            };
            sink(FetchOutcome { request, result });
        });

        Some(request)
    }

    /// Applies a finished fetch.
    ///
    /// Returns `true` when the cached asset list was replaced.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { request, result } = outcome;
        if self.state.in_flight != Some(request) {
            tracing::debug!(
                key = ASSETS_CACHE_KEY,
                request = request.0,
                "Discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(assets) => {
                tracing::info!(
                    key = ASSETS_CACHE_KEY,
                    request = request.0,
                    count = assets.len(),
                    "Assets updated"
                );
                self.dispatch(FetchIntent::Succeeded {
                    request,
                    assets,
                    at: SystemTime::now(),
                });
                true
            }
            Err(err) => {
                tracing::warn!(
                    key = ASSETS_CACHE_KEY,
                    request = request.0,
                    transient = err.is_transient(),
                    error = %err,
                    "Asset fetch failed, keeping cached data"
                );
                self.dispatch(FetchIntent::Failed {
                    request,
                    failure: FetchFailure {
                        summary: err.user_message(),
                        detail: err.to_string(),
                    },
                });
                false
            }
        }
    }

    fn dispatch(&mut self, intent: FetchIntent) {
        self.state = FetchReducer::reduce(std::mem::take(&mut self.state), intent, &());
    }
}
