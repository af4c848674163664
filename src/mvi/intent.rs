//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (option picks, navigation keys)
/// - System events (fetch completions, countdown ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
