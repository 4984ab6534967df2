//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown and 500 if the store is unavailable.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state
        .strategy
        .resolve(&short_code)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "short_code": short_code }))
        })?;

    Ok(Redirect::temporary(&original_url))
}
