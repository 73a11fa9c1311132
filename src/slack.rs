use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::ChatError;

pub trait ChatSink {
    /// Deliver one payload and report the HTTP status the sink answered with.
    fn post(&self, payload: &Value) -> impl Future<Output = Result<u16, ChatError>> + Send;
}

impl<T: ChatSink> ChatSink for &T {
    fn post(&self, payload: &Value) -> impl Future<Output = Result<u16, ChatError>> + Send {
        (**self).post(payload)
    }
}

/// Slack incoming webhook.
pub struct SlackWebhook {
    client: Client,
    url: String,
}

impl SlackWebhook {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl ChatSink for SlackWebhook {
    async fn post(&self, payload: &Value) -> Result<u16, ChatError> {
        let body = serde_json::to_vec(payload).map_err(|e| ChatError::Encode(e.to_string()))?;

        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let data = resp.text().await.unwrap_or_default();
        info!(status, %data, "Slack webhook responded");

        Ok(status)
    }
}
