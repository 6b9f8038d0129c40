use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ErrResp;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("OpenAI API key is not configured on the relay.")]
    MissingApiKey,

    #[error("OpenAI error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        let mut msg = if err.is_timeout() {
            format!("upstream request timed out: {}", err)
        } else {
            err.to_string()
        };

        // the underlying cause only shows up in the source chain
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !msg.ends_with(&text) {
                msg.push_str(": ");
                msg.push_str(&text);
            }
            source = cause.source();
        }
        Self::Transport(msg)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrResp {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
