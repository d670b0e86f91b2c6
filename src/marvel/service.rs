use async_trait::async_trait;

use super::error::MarvelError;
use super::types::CharacterRecord;

/// Source of character records.
///
/// The info panel holds one instance for its whole lifetime and calls it
/// once per refresh cycle. Implementations must tolerate overlapping calls.
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Fetch the character with the given id.
    async fn fetch_by_id(&self, id: u32) -> Result<CharacterRecord, MarvelError>;
}
