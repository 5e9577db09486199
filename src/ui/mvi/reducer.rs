//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `Context` carries read-only facts the transition depends on but the
/// state does not own, such as the page count derived from the asset list.
/// Reducers with no such dependency use `()`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;
    type Context;

    /// Pure function: no I/O, no clocks, no logging.
    fn reduce(state: Self::State, intent: Self::Intent, ctx: &Self::Context) -> Self::State;
}
