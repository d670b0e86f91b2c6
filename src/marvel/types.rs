use serde::{Deserialize, Serialize};

/// Substring the API puts in thumbnail paths of characters without artwork.
pub const NO_IMAGE_SENTINEL: &str = "image_not_available";

/// A single character as displayed by the info panel.
///
/// Records are snapshots: the UI never mutates one, it replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u32,
    pub name: String,
    /// May be empty.
    pub description: String,
    pub thumbnail_url: String,
    pub homepage_url: String,
    pub wiki_url: String,
    /// In API order; may be empty.
    pub comics: Vec<ComicSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicSummary {
    pub name: String,
}

impl CharacterRecord {
    /// True unless the thumbnail is the API's "no image" placeholder.
    pub fn has_image(&self) -> bool {
        !self.thumbnail_url.contains(NO_IMAGE_SENTINEL)
    }
}
