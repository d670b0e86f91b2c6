//! State for the character info panel.

use std::sync::Arc;

use crate::config::StalePolicy;
use crate::marvel::CharacterRecord;
use crate::ui::mvi::UiState;

use super::intent::RequestId;

/// Which of the four views the panel shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CharInfoPhase {
    /// Nothing selected yet.
    #[default]
    Placeholder,

    /// A fetch is in flight.
    Loading,

    /// The latest accepted fetch failed.
    Error,

    /// A record is on display.
    Ready(Arc<CharacterRecord>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharInfoState {
    pub phase: CharInfoPhase,
    /// Tag of the most recently issued request; 0 before the first one.
    pub latest_request: RequestId,
    pub stale_policy: StalePolicy,
    /// Animation tick for the spinner.
    pub animation_tick: u8,
}

impl UiState for CharInfoState {}

impl CharInfoState {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            stale_policy,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CharInfoPhase::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self.phase, CharInfoPhase::Error)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.phase, CharInfoPhase::Placeholder)
    }

    /// The displayed record, if any.
    pub fn record(&self) -> Option<&Arc<CharacterRecord>> {
        match &self.phase {
            CharInfoPhase::Ready(record) => Some(record),
            _ => None,
        }
    }

    /// Whether a completion tagged `request` may change this state.
    pub fn accepts(&self, request: RequestId) -> bool {
        match self.stale_policy {
            StalePolicy::LatestRequestWins => request == self.latest_request,
            StalePolicy::LastResolvedWins => true,
        }
    }
}
