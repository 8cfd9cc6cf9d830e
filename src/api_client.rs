//! Thin HTTP wrappers over the origin's record collections, used by the
//! admin and gallery frontends. Every call is independent; there are no
//! retries and no request cancellation.

use reqwest::Client;
use serde_json::json;
use std::fmt;

use crate::media_host::{AssetKind, UploadParams};
use crate::models::audio::AudioClip;
use crate::models::card::Card;

#[derive(Debug)]
pub enum ApiClientError {
    /// The request could not be sent or the response not received.
    Http(reqwest::Error),
    /// The server answered with an error body.
    Api { status: u16, message: String },
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Http(e) => write!(f, "HTTP error: {e}"),
            ApiClientError::Api { status, message } => {
                write!(f, "server returned {status}: {message}")
            }
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(e: reqwest::Error) -> Self {
        ApiClientError::Http(e)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        if resp.status().is_success() {
            return Ok(resp.json().await?);
        }
        let status = resp.status().as_u16();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "request failed".to_string());
        Err(ApiClientError::Api { status, message })
    }

    pub async fn list_cards(&self) -> Result<Vec<Card>, ApiClientError> {
        let url = format!("{}/api/cards", self.base_url);
        Self::decode(self.client.get(&url).send().await?).await
    }

    pub async fn create_card(
        &self,
        title: &str,
        description: &str,
        image: &str,
    ) -> Result<Card, ApiClientError> {
        let url = format!("{}/api/cards", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "title": title, "description": description, "image": image }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn delete_card(&self, id: &str) -> Result<(), ApiClientError> {
        let url = format!("{}/api/cards", self.base_url);
        let resp = self
            .client
            .delete(&url)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        Self::decode::<serde_json::Value>(resp).await.map(|_| ())
    }

    pub async fn list_audio(&self) -> Result<Vec<AudioClip>, ApiClientError> {
        let url = format!("{}/api/audio", self.base_url);
        Self::decode(self.client.get(&url).send().await?).await
    }

    pub async fn create_audio(&self, name: &str, src: &str) -> Result<AudioClip, ApiClientError> {
        let url = format!("{}/api/audio", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "name": name, "src": src }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn delete_audio(&self, id: &str) -> Result<(), ApiClientError> {
        let url = format!("{}/api/audio", self.base_url);
        let resp = self
            .client
            .delete(&url)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        Self::decode::<serde_json::Value>(resp).await.map(|_| ())
    }

    /// One-time signed upload parameters for a direct media-host upload.
    pub async fn upload_params(&self, kind: AssetKind) -> Result<UploadParams, ApiClientError> {
        let url = format!("{}/api/upload-params/{}", self.base_url, kind.folder());
        Self::decode(self.client.get(&url).send().await?).await
    }
}
