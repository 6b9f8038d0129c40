use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde_json::Value;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use crate::{
    appstate::AppState,
    error::RelayError,
    prompt::SYSTEM_PROMPT,
    types::{ChatReply, ChatReq, Reply},
};

pub fn router() -> Router<AppState> {
    // OPTIONS never reaches the handler, the CORS layer answers it.
    // Like a bare worker, the path is irrelevant: anything unrouted is relayed.
    Router::new().route("/", any(relay)).fallback(relay)
}

pub async fn relay(State(state): State<AppState>, body: Bytes) -> Response {
    let rid = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let start = Instant::now();

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&rid.to_string()) {
        headers.insert(HeaderName::from_static("x-rid"), value);
    }
    headers.insert(
        HeaderName::from_static("x-gateway"),
        HeaderValue::from_static("chat-relay"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    match handle(&state, &body).await {
        Ok(reply) => {
            info!(
                rid = %rid,
                elapsed_ms = start.elapsed().as_millis(),
                has_reply = reply.reply.is_some(),
                "relayed chat turn"
            );
            (headers, Json(reply)).into_response()
        }
        Err(err) => {
            warn!(
                rid = %rid,
                status = err.status().as_u16(),
                elapsed_ms = start.elapsed().as_millis(),
                "relay failed: {}",
                err
            );
            (headers, err).into_response()
        }
    }
}

async fn handle(state: &AppState, body: &[u8]) -> Result<ChatReply, RelayError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| RelayError::InvalidJson)?;
    // serde would otherwise accept `["hi"]` as a positional ChatReq
    if !value.is_object() {
        return Err(RelayError::invalid_request("expected a JSON object"));
    }
    let req: ChatReq =
        serde_json::from_value(value).map_err(|e| RelayError::invalid_request(e.to_string()))?;

    let key = state
        .config
        .api_key
        .as_ref()
        .ok_or(RelayError::MissingApiKey)?;

    let completion = req.into_completion(SYSTEM_PROMPT, &state.config.default_model);
    let raw = state.upstream.complete(key, &completion).await?;

    Ok(ChatReply {
        reply: Reply::extract(&raw).into_text(),
        raw,
    })
}
