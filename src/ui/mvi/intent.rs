//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either user actions (a new character id was entered) or
/// system events (a fetch finished). Intents cross thread boundaries when
/// background tasks report back, hence `Send`.
pub trait Intent: Send + 'static {}
