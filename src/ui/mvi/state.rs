//! Base trait for state objects.

/// Marker trait for reducer state.
///
/// `Default` gives the initial state and lets callers `mem::take` the
/// current one into the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
