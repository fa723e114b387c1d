//! Base trait for page state.

/// Marker trait for page state objects.
///
/// States should be:
/// - Cheap to clone (shared buffers behind `Arc`)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for asserting transitions)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
