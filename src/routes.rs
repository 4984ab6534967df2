//! Top-level router.
//!
//! # Route Structure
//!
//! - `GET  /`             - Service banner
//! - `POST /urls`         - Create a short URL
//! - `GET  /{short_code}` - Redirect to the original URL
//!
//! Requests are traced and trailing slashes trimmed.

use crate::api::handlers::{create_url_handler, info_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(info_handler))
        .route("/urls", post(create_url_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
