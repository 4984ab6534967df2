//! Handler for short URL creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{CreateUrlRequest, CreateUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL through the active strategy.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com", "short_code": "promo" }
/// ```
///
/// `short_code` is optional.
///
/// # Errors
///
/// - 400 if the URL is malformed
/// - 409 if the code is taken or no free code could be generated
/// - 500 if the store is unavailable
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<CreateUrlResponse>), AppError> {
    payload.validate()?;

    let created = state
        .strategy
        .create_short_url(&payload.original_url, payload.short_code.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
