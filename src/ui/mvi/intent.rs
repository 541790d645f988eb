//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are key presses, timer ticks or any other event a reducer
/// turns into a new state.
pub trait Intent: Send + 'static {}
