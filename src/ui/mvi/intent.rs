//! Marker trait for intents.

/// Intents are the only input a reducer accepts: key presses, page
/// buttons, fetch starts and completions.
pub trait Intent: Send + 'static {}
