use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use uuid::Uuid;

pub const DEFAULT_MUSICS_URL: &str = "http://localhost:8080/musics";
pub const MUSICS_URL_ENV: &str = "MUSICS_URL";
pub const MUSICS_TIMEOUT_ENV: &str = "MUSICS_TIMEOUT_SECS";

/// Static configuration used throughout the application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    musics_url: String,
    request_timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
    client_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client_id = format!("musics-tui-{}", Uuid::new_v4());
        let user_agent = format!(
            "musics-tui/{} ( unique-id={client_id} )",
            env!("CARGO_PKG_VERSION")
        );

        Self {
            musics_url: DEFAULT_MUSICS_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent,
            client_id,
        }
    }
}

impl AppConfig {
    /// Builds the default configuration and applies `MUSICS_URL` and
    /// `MUSICS_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = env::var(MUSICS_URL_ENV) {
            if !url.trim().is_empty() {
                config = config.with_musics_url(url.trim())?;
            }
        }
        if let Ok(secs) = env::var(MUSICS_TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid {MUSICS_TIMEOUT_ENV}: {secs}"))?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_musics_url(mut self, url: &str) -> Result<Self> {
        Url::parse(url).with_context(|| format!("Invalid musics endpoint: {url}"))?;
        self.musics_url = url.to_string();
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self.connect_timeout = self.connect_timeout.min(timeout);
        self
    }

    pub fn musics_url(&self) -> &str {
        &self.musics_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
