//! State of the asset fetch cache.

use std::time::SystemTime;

use crate::assets::Asset;
use crate::ui::mvi::UiState;

/// Monotonic id stamped on every fetch so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Where the cache is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// First fetch in flight, no data to show.
    Loading,
    /// Last fetch succeeded.
    Success,
    /// Fetch in flight while earlier data stays visible.
    Refreshing,
    /// Last fetch failed. Earlier data, if any, is kept.
    Error,
}

impl FetchStatus {
    pub fn is_fetching(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchCacheState {
    /// Most recent successful result, in upstream order.
    pub assets: Vec<Asset>,
    pub status: FetchStatus,
    /// The one request whose completion will be accepted.
    pub in_flight: Option<RequestId>,
    /// When `assets` was last replaced. `None` until the first success.
    pub updated_at: Option<SystemTime>,
    pub last_error: Option<FetchFailure>,
}

/// What went wrong with the last fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Short label for the header, e.g. "Network unreachable".
    pub summary: &'static str,
    /// Full error chain.
    pub detail: String,
}

impl UiState for FetchCacheState {}

impl FetchCacheState {
    /// True once any fetch has succeeded, even with an empty list.
    pub fn has_data(&self) -> bool {
        self.updated_at.is_some()
    }
}
