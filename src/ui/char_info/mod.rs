//! Character info panel feature module.
//!
//! Shows one Marvel character: a placeholder before anything is selected,
//! a spinner while the record loads, an error message when the fetch
//! fails, and the record's details otherwise.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Panel phase enum and request bookkeeping
//! - `intent.rs` - Request lifecycle events
//! - `reducer.rs` - State transitions, including stale-result handling
//! - `view.rs` - Pure view model of a loaded record
//! - `render.rs` - Rendering
//! - `panel.rs` - Owns the service and runs fetches

mod intent;
mod panel;
mod reducer;
mod render;
mod state;
mod view;

pub use intent::{CharInfoIntent, RequestId};
pub use panel::CharInfoPanel;
pub use reducer::CharInfoReducer;
pub use render::{render_char_info, ERROR_TEXT, LOADING_TEXT, PLACEHOLDER_TEXT};
pub use state::{CharInfoPhase, CharInfoState};
pub use view::{
    ContentView, ImageFit, LinkButton, MAX_COMICS, NO_COMICS_TEXT, NO_DESCRIPTION_TEXT,
};
