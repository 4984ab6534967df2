//! URL mapping entity.

use serde::Serialize;

/// A mapping between a short code and the original URL.
///
/// The short code is the natural key. Mappings are never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: String,
    pub original_url: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }
}

/// Result of a successful `create_short_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedUrl {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
}

impl ShortenedUrl {
    /// Builds the result for a mapping, joining `base_url` and the code.
    pub fn from_mapping(mapping: UrlMapping, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), mapping.short_code);
        Self {
            short_code: mapping.short_code,
            original_url: mapping.original_url,
            short_url,
        }
    }
}
