//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, pasted text, dropped files)
/// - System events (settled requests)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
