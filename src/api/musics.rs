use anyhow::{Context, Result};
use reqwest::{Client, Url, header};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::Music;

#[derive(Debug, Error)]
pub enum MusicsError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

#[derive(Clone)]
pub struct MusicsClient {
    http: Client,
    endpoint: Url,
}

impl MusicsClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "X-Client-Id",
            header::HeaderValue::from_str(config.client_id())
                .context("invalid client identifier header value")?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .context("unable to construct http client")?;

        let endpoint = Url::parse(config.musics_url())
            .with_context(|| format!("invalid musics endpoint: {}", config.musics_url()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches the full track list, preserving the order the server returned.
    ///
    /// An empty array is a valid, empty result.
    pub async fn fetch_musics(&self) -> Result<Vec<Music>, MusicsError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;

        // Read the body first so a malformed payload is reported as a parse error.
        let bytes = response.bytes().await?;
        serde_json::from_slice::<Vec<Music>>(&bytes)
            .map_err(|err| MusicsError::Parse(err.to_string()))
    }
}
