use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::{config::ApiKey, error::RelayError, types::CompletionReq};

/// A chat-completion backend: one request in, the raw JSON payload out.
///
/// Non-success statuses come back as [`RelayError::Upstream`]; anything that
/// stops a payload from arriving is [`RelayError::Transport`].
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    async fn complete(&self, key: &ApiKey, req: &CompletionReq) -> Result<Value, RelayError>;
}

pub struct OpenAiClient {
    client: Client,
    url: String,
}

impl OpenAiClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ChatCompletions for OpenAiClient {
    async fn complete(&self, key: &ApiKey, req: &CompletionReq) -> Result<Value, RelayError> {
        debug!(url = %self.url, model = %req.model, "forwarding chat completion");

        let start = Instant::now();
        let resp = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", key.expose()))
            .json(req)
            .send()
            .await?;

        let status = resp.status();
        debug!(
            status = status.as_u16(),
            upstream_ms = start.elapsed().as_millis(),
            "upstream responded"
        );

        if !status.is_success() {
            let body = resp.text().await?;
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<Value>().await?)
    }
}
