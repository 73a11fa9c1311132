use std::env;

use dotenv::dotenv;

use crate::{ConfigError, ConfigResult};

pub const DEFAULT_RSS_FEED_URL: &str = "https://aws.amazon.com/new/feed/";
pub const DEFAULT_KEY_PREFIX: &str = "reports/";
/// Seven days.
pub const DEFAULT_PRESIGNED_URL_EXPIRATION: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub feed_url: String,
    pub bucket: String,
    pub key_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub webhook_url: String,
    pub presigned_url_expiration: u64,
    pub key_prefix: String,
}

impl GeneratorConfig {
    pub fn from_env() -> ConfigResult<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let bucket = lookup("S3_BUCKET_NAME")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("S3_BUCKET_NAME"))?;

        Ok(Self {
            feed_url: lookup("RSS_FEED_URL").unwrap_or_else(|| DEFAULT_RSS_FEED_URL.to_string()),
            bucket,
            key_prefix: lookup("S3_KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        })
    }
}

impl NotifierConfig {
    pub fn from_env() -> ConfigResult<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let webhook_url = lookup("SLACK_WEBHOOK_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("SLACK_WEBHOOK_URL"))?;

        let presigned_url_expiration = match lookup("PRESIGNED_URL_EXPIRATION") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PRESIGNED_URL_EXPIRATION",
                value,
            })?,
            None => DEFAULT_PRESIGNED_URL_EXPIRATION,
        };

        Ok(Self {
            webhook_url,
            presigned_url_expiration,
            key_prefix: lookup("S3_KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        })
    }

    /// Whole hours the presigned link stays valid, as shown in the chat footer.
    pub fn expiration_hours(&self) -> u64 {
        self.presigned_url_expiration / 3600
    }
}
