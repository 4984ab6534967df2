//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::domain::entities::ShortenedUrl;

/// Path segments owned by other routes; a mapping under one of these could
/// never be followed.
pub const RESERVED_CODES: &[&str] = &["urls"];

/// Request to create one short URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// The URL to shorten; must be an absolute http(s) URL.
    #[validate(custom(function = "validate_http_url"))]
    pub original_url: String,

    /// Optional caller-chosen code; generated when absent.
    #[validate(
        length(min = 1, max = 64),
        custom(function = "validate_not_reserved")
    )]
    pub short_code: Option<String>,
}

fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|_| {
        ValidationError::new("invalid_url").with_message("Invalid URL format".into())
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("unsupported_scheme")
            .with_message("Only http and https URLs are supported".into())),
    }
}

fn validate_not_reserved(code: &str) -> Result<(), ValidationError> {
    if RESERVED_CODES.contains(&code) {
        return Err(ValidationError::new("reserved_code")
            .with_message(format!("'{}' is reserved", code).into()));
    }
    Ok(())
}

/// Created short URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUrlResponse {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
}

impl From<ShortenedUrl> for CreateUrlResponse {
    fn from(value: ShortenedUrl) -> Self {
        Self {
            short_code: value.short_code,
            original_url: value.original_url,
            short_url: value.short_url,
        }
    }
}
