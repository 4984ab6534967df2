//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored `short_code -> original_url` row
//! - [`ShortenedUrl`] - The result handed back to callers after a create

pub mod mapping;

pub use mapping::{ShortenedUrl, UrlMapping};
