pub mod appstate;
pub mod config;
pub mod error;
pub mod inference;
pub mod prompt;
pub mod routes;
pub mod types;

pub use appstate::AppState;
pub use config::{ApiKey, Config};
pub use error::RelayError;
pub use inference::{ChatCompletions, OpenAiClient};
pub use types::{ChatReply, ChatReq, CompletionReq, ErrResp, Message, Reply, Role};

use axum::{
    Router,
    http::{Method, header},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Any origin may call the relay; preflights are answered here, before routing.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
