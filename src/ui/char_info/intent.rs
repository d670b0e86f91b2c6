//! Intents for the character info panel.

use std::sync::Arc;

use crate::marvel::CharacterRecord;
use crate::ui::mvi::Intent;

/// Monotonic tag of one refresh cycle. The first request is 1.
pub type RequestId = u64;

#[derive(Debug, Clone)]
pub enum CharInfoIntent {
    /// A fetch was issued for a new character id.
    Requested { request: RequestId },

    /// The fetch tagged `request` returned a record.
    Loaded {
        request: RequestId,
        record: Arc<CharacterRecord>,
    },

    /// The fetch tagged `request` failed. The cause is not carried.
    Failed { request: RequestId },

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for CharInfoIntent {}
