use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// One chat turn as sent by the browser widget.
///
/// Optional fields of the wrong JSON type are treated as absent, so a
/// `"temperature": "hot"` falls back to the default instead of failing the request.
#[derive(Debug, Deserialize)]
pub struct ChatReq {
    pub message: String,
    #[serde(default, deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_tokens: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ChatReq {
    /// Applies the defaults and prepends `system_prompt`. Deterministic for a given input.
    pub fn into_completion(self, system_prompt: &str, default_model: &str) -> CompletionReq {
        let model = self
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_model.to_string());
        let max_tokens = self
            .max_tokens
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);

        CompletionReq {
            model,
            messages: vec![
                Message::new(Role::System, system_prompt),
                Message::new(Role::User, self.message),
            ],
            max_tokens,
            temperature,
        }
    }
}

/// Body posted to the upstream chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompletionReq {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Where the assistant text was found in the first upstream choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    // legacy completions shape: `choices[0].text`
    Text(String),
    Missing,
}

impl Reply {
    pub fn extract(payload: &Value) -> Self {
        let first = payload.pointer("/choices/0");
        if let Some(content) = first
            .and_then(|c| c.pointer("/message/content"))
            .and_then(Value::as_str)
        {
            return Reply::Message(content.to_string());
        }
        if let Some(text) = first.and_then(|c| c.get("text")).and_then(Value::as_str) {
            return Reply::Text(text.to_string());
        }
        Reply::Missing
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Reply::Message(text) | Reply::Text(text) => Some(text),
            Reply::Missing => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: Option<String>,
    pub raw: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrResp {
    pub error: String,
}
