use std::sync::Arc;

use crate::{
    config::Config,
    error::RelayError,
    inference::{ChatCompletions, OpenAiClient},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn ChatCompletions>,
}

impl AppState {
    /// State wired to the real upstream described by `config`.
    pub fn new(config: Config) -> Result<Self, RelayError> {
        let upstream = OpenAiClient::new(&config.upstream_url, config.upstream_timeout)?;
        Ok(Self::with_upstream(config, Arc::new(upstream)))
    }

    pub fn with_upstream(config: Config, upstream: Arc<dyn ChatCompletions>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
