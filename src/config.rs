use anyhow::Context;
use std::{env, fmt, time::Duration};

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Upstream credential. Never printed, not even in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // `None` is not a startup error: each relay request answers 500 instead.
    pub api_key: Option<ApiKey>,

    pub upstream_url: String,
    pub default_model: String,
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            upstream_timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match non_empty("RELAY_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RELAY_PORT is not a valid port: {}", raw))?,
            None => defaults.port,
        };

        let upstream_timeout = match non_empty("RELAY_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().with_context(|| {
                format!("RELAY_UPSTREAM_TIMEOUT_SECS is not a number of seconds: {}", raw)
            })?),
            None => defaults.upstream_timeout,
        };

        Ok(Config {
            host: non_empty("RELAY_HOST").unwrap_or(defaults.host),
            port,
            api_key: non_empty("OPENAI_API_KEY").map(ApiKey::new),
            upstream_url: non_empty("RELAY_UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            default_model: non_empty("RELAY_DEFAULT_MODEL").unwrap_or(defaults.default_model),
            upstream_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
