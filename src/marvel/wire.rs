//! Response envelope of `GET /v1/public/characters/{id}`.

use serde::Deserialize;

use super::types::{CharacterRecord, ComicSummary};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub data: DataContainer,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DataContainer {
    #[serde(default)]
    pub results: Vec<CharacterDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharacterDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail: ImageDto,
    #[serde(default)]
    pub urls: Vec<UrlDto>,
    #[serde(default)]
    pub comics: ComicListDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageDto {
    pub path: String,
    pub extension: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UrlDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComicListDto {
    #[serde(default)]
    pub items: Vec<ComicDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComicDto {
    pub name: String,
}

/// Error body; `code` is a number for 404s and a string for auth failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Envelope {
    /// The first result, which is the only one for a by-id lookup.
    pub fn into_first_record(self) -> Option<CharacterRecord> {
        self.data.results.into_iter().next().map(CharacterRecord::from)
    }
}

impl From<CharacterDto> for CharacterRecord {
    fn from(dto: CharacterDto) -> Self {
        let homepage_url = pick_url(&dto.urls, "detail", 0);
        let wiki_url = pick_url(&dto.urls, "wiki", 1);

        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            thumbnail_url: format!("{}.{}", dto.thumbnail.path, dto.thumbnail.extension),
            homepage_url,
            wiki_url,
            comics: dto
                .comics
                .items
                .into_iter()
                .map(|c| ComicSummary { name: c.name })
                .collect(),
        }
    }
}

/// URL of the given type, else the one at `fallback_index`, else empty.
fn pick_url(urls: &[UrlDto], kind: &str, fallback_index: usize) -> String {
    urls.iter()
        .find(|u| u.kind == kind)
        .or_else(|| urls.get(fallback_index))
        .map(|u| u.url.clone())
        .unwrap_or_default()
}

/// Human-readable message from an error body, or the raw text.
pub(crate) fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorBody {
            status: Some(status),
            ..
        }) => status,
        _ => String::from_utf8_lossy(body).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A_BOMB: &str = r#"{
        "code": 200,
        "status": "Ok",
        "data": {
            "offset": 0,
            "limit": 20,
            "total": 1,
            "count": 1,
            "results": [{
                "id": 1017100,
                "name": "A-Bomb (HAS)",
                "description": "Rick Jones has been Hulk's best bud since day one.",
                "thumbnail": {
                    "path": "http://i.annihil.us/u/prod/marvel/i/mg/3/20/5232158de5b16",
                    "extension": "jpg"
                },
                "urls": [
                    {"type": "detail", "url": "http://marvel.com/characters/76/a-bomb"},
                    {"type": "comiclink", "url": "http://marvel.com/comics/characters/1017100/a-bomb_has"}
                ],
                "comics": {
                    "available": 2,
                    "items": [
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/47176", "name": "FREE COMIC BOOK DAY 2013 1 (2013) #1"},
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/40632", "name": "Hulk (2008) #53"}
                    ]
                }
            }]
        }
    }"#;

    #[test]
    fn transforms_character_payload() {
        let envelope: Envelope = serde_json::from_str(A_BOMB).unwrap();
        let record = envelope.into_first_record().unwrap();

        assert_eq!(record.id, 1017100);
        assert_eq!(record.name, "A-Bomb (HAS)");
        assert_eq!(
            record.thumbnail_url,
            "http://i.annihil.us/u/prod/marvel/i/mg/3/20/5232158de5b16.jpg"
        );
        assert_eq!(record.homepage_url, "http://marvel.com/characters/76/a-bomb");
        // No "wiki" entry: falls back to the second URL.
        assert_eq!(
            record.wiki_url,
            "http://marvel.com/comics/characters/1017100/a-bomb_has"
        );
        assert_eq!(record.comics.len(), 2);
        assert_eq!(record.comics[1].name, "Hulk (2008) #53");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{"data": {"results": [{
            "id": 1011334,
            "name": "3-D Man",
            "thumbnail": {"path": "http://x/image_not_available", "extension": "jpg"}
        }]}}"#;
        let record = serde_json::from_str::<Envelope>(json)
            .unwrap()
            .into_first_record()
            .unwrap();

        assert!(record.description.is_empty());
        assert!(record.homepage_url.is_empty());
        assert!(record.wiki_url.is_empty());
        assert!(record.comics.is_empty());
        assert!(!record.has_image());
    }

    #[test]
    fn empty_results_yield_no_record() {
        let envelope: Envelope = serde_json::from_str(r#"{"data": {"results": []}}"#).unwrap();
        assert!(envelope.into_first_record().is_none());
    }

    #[test]
    fn wiki_url_prefers_typed_entry() {
        let urls = vec![
            UrlDto { kind: "comiclink".into(), url: "c".into() },
            UrlDto { kind: "wiki".into(), url: "w".into() },
            UrlDto { kind: "detail".into(), url: "d".into() },
        ];
        assert_eq!(pick_url(&urls, "detail", 0), "d");
        assert_eq!(pick_url(&urls, "wiki", 1), "w");
    }

    #[test]
    fn error_message_reads_both_body_shapes() {
        assert_eq!(
            error_message(br#"{"code": 404, "status": "We couldn't find that character"}"#),
            "We couldn't find that character"
        );
        assert_eq!(
            error_message(br#"{"code": "InvalidCredentials", "message": "The passed API key is invalid."}"#),
            "The passed API key is invalid."
        );
        assert_eq!(error_message(b"Bad Gateway\n"), "Bad Gateway");
    }
}
