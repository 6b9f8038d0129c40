pub mod healthz;
pub mod relay;

use crate::appstate::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(healthz::router())
        .merge(relay::router())
}
