//! Marker trait for reducer-owned state.

/// States are replaced wholesale by their reducer, never patched in place
/// by callers.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
