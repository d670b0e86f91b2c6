//! View model for a loaded character.

use crate::marvel::CharacterRecord;

/// Comics beyond this many are not listed.
pub const MAX_COMICS: usize = 10;

pub const NO_DESCRIPTION_TEXT: &str = "No description available";
pub const NO_COMICS_TEXT: &str = "There is no comics with this character";

/// How the thumbnail is fitted into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Letterboxed; used for the "no image" placeholder so it isn't cropped.
    Contain,
    Cover,
}

impl ImageFit {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFit::Contain => "contain",
            ImageFit::Cover => "cover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: &'static str,
    pub url: String,
}

/// Everything the content view shows, derived from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub name: String,
    pub thumbnail_url: String,
    pub image_fit: ImageFit,
    pub description: String,
    /// At most `MAX_COMICS` names, or the single fallback line.
    pub comics: Vec<String>,
    pub links: [LinkButton; 2],
}

impl ContentView {
    pub fn from_record(record: &CharacterRecord) -> Self {
        let image_fit = if record.has_image() {
            ImageFit::Cover
        } else {
            ImageFit::Contain
        };

        let description = if record.description.is_empty() {
            NO_DESCRIPTION_TEXT.to_string()
        } else {
            record.description.clone()
        };

        let comics = if record.comics.is_empty() {
            vec![NO_COMICS_TEXT.to_string()]
        } else {
            record
                .comics
                .iter()
                .take(MAX_COMICS)
                .map(|c| c.name.clone())
                .collect()
        };

        Self {
            name: record.name.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            image_fit,
            description,
            comics,
            links: [
                LinkButton {
                    label: "homepage",
                    url: record.homepage_url.clone(),
                },
                LinkButton {
                    label: "Wiki",
                    url: record.wiki_url.clone(),
                },
            ],
        }
    }
}
