//! Base trait for model state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Moved into the reducer and moved back out as the next state
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}
