//! Marvel Comics API access.
//!
//! - `types.rs` - Domain records handed to the UI
//! - `wire.rs` - Response envelope as sent by the API
//! - `service.rs` - The `CharacterService` seam the UI depends on
//! - `client.rs` - reqwest implementation of the service

mod client;
mod error;
mod service;
mod types;
mod wire;

pub use client::MarvelClient;
pub use error::MarvelError;
pub use service::CharacterService;
pub use types::{CharacterRecord, ComicSummary, NO_IMAGE_SENTINEL};
