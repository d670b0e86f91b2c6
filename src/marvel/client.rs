use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use crate::config::ApiConfig;

use super::error::MarvelError;
use super::service::CharacterService;
use super::types::CharacterRecord;
use super::wire::{self, Envelope};

/// reqwest-backed `CharacterService`.
///
/// Build once and share; the inner `Client` pools connections.
pub struct MarvelClient {
    client: Client,
    base_url: String,
    public_key: Option<String>,
}

impl MarvelClient {
    pub fn new(config: &ApiConfig) -> Result<Self, MarvelError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            public_key: config.public_key.clone(),
        })
    }

    /// `{base_url}/v1/public/characters/{id}?apikey=...`
    pub fn character_url(&self, id: u32) -> Result<Url, MarvelError> {
        let key = self
            .public_key
            .as_deref()
            .ok_or(MarvelError::MissingApiKey)?;

        let raw = format!("{}/v1/public/characters/{}", self.base_url, id);
        let mut url = Url::parse(&raw).map_err(|e| MarvelError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("apikey", key);
        Ok(url)
    }

    async fn do_fetch(&self, id: u32) -> Result<CharacterRecord, MarvelError> {
        let url = self.character_url(id)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(MarvelError::NotFound { id });
        }
        if !status.is_success() {
            return Err(MarvelError::Status {
                status: status.as_u16(),
                message: wire::error_message(&body),
            });
        }

        let envelope: Envelope = serde_json::from_slice(&body)?;
        envelope
            .into_first_record()
            .ok_or(MarvelError::NotFound { id })
    }
}

#[async_trait]
impl CharacterService for MarvelClient {
    async fn fetch_by_id(&self, id: u32) -> Result<CharacterRecord, MarvelError> {
        tracing::debug!(character_id = id, "Fetching character");

        let result = self.do_fetch(id).await;
        match &result {
            Ok(record) => tracing::debug!(
                character_id = id,
                name = %record.name,
                comics = record.comics.len(),
                "Character fetched"
            ),
            Err(err) => tracing::debug!(
                character_id = id,
                kind = err.error_type(),
                error = %err,
                "Character fetch failed"
            ),
        }
        result
    }
}
