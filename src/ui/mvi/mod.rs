//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer(ctx) ──→ State ──→ View
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: owned, cloneable snapshot a view can render from
//! - **Intent**: a user action or a system event (fetch completion)
//! - **Reducer**: pure `(State, Intent, &Context) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
