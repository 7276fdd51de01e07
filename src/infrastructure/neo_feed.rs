use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

use crate::{
    domain::models::{FeedPayload, FeedWindow},
    infrastructure::config::FeedConfig,
};

#[derive(Debug, Error)]
pub enum FeedError {
    /// Carries no request URL; the URL embeds the API key.
    #[error("feed request failed: {0}")]
    Transport(reqwest::Error),
    #[error("feed responded with status {0}")]
    Status(StatusCode),
    #[error("feed returned malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of near-earth-object data for a date window.
#[async_trait]
pub trait NeoFeed: Send + Sync {
    async fn fetch(&self, window: &FeedWindow) -> Result<FeedPayload, FeedError>;
}

pub fn build_feed(config: &FeedConfig) -> anyhow::Result<Arc<dyn NeoFeed>> {
    Ok(Arc::new(HttpNeoFeed::new(config)?))
}

pub struct HttpNeoFeed {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpNeoFeed {
    pub fn new(config: &FeedConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl NeoFeed for HttpNeoFeed {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn fetch(&self, window: &FeedWindow) -> Result<FeedPayload, FeedError> {
        let start_date = window.start_date.to_string();
        let end_date = window.end_date.to_string();
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("start_date", start_date.as_str()),
                ("end_date", end_date.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FeedError::Transport(err.without_url()))?;
        let payload: FeedPayload = serde_json::from_str(&body)?;
        info!(
            element_count = payload.element_count,
            "near-earth-object feed fetched"
        );
        Ok(payload)
    }
}
