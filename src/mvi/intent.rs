//! Marker trait for intents.

/// Something that happened and may change state.
///
/// Intents cover:
/// - Request lifecycle events (started, loaded, failed)
/// - Form edits and submissions
pub trait Intent: Send + 'static {}
