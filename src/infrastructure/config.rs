use chrono::NaiveDate;
use serde::Deserialize;
use std::env;

use crate::domain::models::FeedWindow;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Upstream near-earth-object feed settings.
///
/// The date window is fixed by configuration and never derived from the
/// current time.
#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_feed_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_feed_date")]
    pub end_date: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_url(),
            api_key: String::new(),
            start_date: default_feed_date(),
            end_date: default_feed_date(),
        }
    }
}

impl FeedConfig {
    pub fn window(&self) -> FeedWindow {
        FeedWindow {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("NEO_GRAPH").separator("__"));
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;

        // An empty key is passed through; the upstream rejects it.
        if config.feed.api_key.trim().is_empty() {
            if let Ok(key) = env::var("API_KEY") {
                config.feed.api_key = key;
            }
        }

        if config.feed.end_date < config.feed.start_date {
            return Err(config::ConfigError::Message(format!(
                "Feed end date {} precedes start date {}.",
                config.feed.end_date, config.feed.start_date
            )));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_feed_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}

fn default_feed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 5, 24).unwrap_or_default()
}
