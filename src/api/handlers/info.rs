//! Handler for the service banner.

use axum::{Json, extract::State};

use crate::api::dto::info::InfoResponse;
use crate::state::AppState;

/// `GET /` - service name, version and active strategy.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Shortlink URL Shortener API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        strategy: state.strategy.name().to_string(),
    })
}
