//! Reducer for the character info panel.

use crate::config::StalePolicy;
use crate::ui::mvi::Reducer;

use super::intent::CharInfoIntent;
use super::state::{CharInfoPhase, CharInfoState};

pub struct CharInfoReducer;

impl Reducer for CharInfoReducer {
    type State = CharInfoState;
    type Intent = CharInfoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Entering Loading also clears any previous error.
            CharInfoIntent::Requested { request } => CharInfoState {
                phase: CharInfoPhase::Loading,
                latest_request: request,
                animation_tick: 0,
                ..state
            },

            CharInfoIntent::Loaded { request, record } => {
                if !state.accepts(request) {
                    return state;
                }
                // Last-resolved-wins only lets a new request clear an error;
                // a success landing on the error view leaves it up.
                if state.stale_policy == StalePolicy::LastResolvedWins && state.has_error() {
                    return state;
                }
                CharInfoState {
                    phase: CharInfoPhase::Ready(record),
                    ..state
                }
            }

            CharInfoIntent::Failed { request } => {
                if !state.accepts(request) {
                    return state;
                }
                CharInfoState {
                    phase: CharInfoPhase::Error,
                    ..state
                }
            }

            CharInfoIntent::AnimationTick => {
                if !state.is_loading() {
                    return state;
                }
                CharInfoState {
                    animation_tick: state.animation_tick.wrapping_add(1),
                    ..state
                }
            }
        }
    }
}
