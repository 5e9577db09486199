use super::intent::FetchIntent;
use super::state::{FetchCacheState, FetchStatus};
use crate::ui::mvi::Reducer;

/// Fetch lifecycle transitions.
///
/// Completions for any request other than the one in flight leave the state
/// untouched, so a slow stale response can never overwrite a newer one.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchCacheState;
    type Intent = FetchIntent;
    type Context = ();

    fn reduce(state: Self::State, intent: Self::Intent, _ctx: &()) -> Self::State {
        match intent {
            FetchIntent::Started { request } => {
                let status = if state.has_data() {
                    FetchStatus::Refreshing
                } else {
                    FetchStatus::Loading
                };
                FetchCacheState {
                    status,
                    in_flight: Some(request),
                    ..state
                }
            }
            FetchIntent::Succeeded {
                request,
                assets,
                at,
            } if state.in_flight == Some(request) => FetchCacheState {
                assets,
                status: FetchStatus::Success,
                in_flight: None,
                updated_at: Some(at),
                last_error: None,
            },
            FetchIntent::Failed { request, failure } if state.in_flight == Some(request) => {
                FetchCacheState {
                    status: FetchStatus::Error,
                    in_flight: None,
                    last_error: Some(failure),
                    ..state
                }
            }
            FetchIntent::Succeeded { .. } | FetchIntent::Failed { .. } => state,
        }
    }
}
