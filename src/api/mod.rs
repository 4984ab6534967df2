//! HTTP layer: translates requests into strategy calls.
//!
//! Validates input, maps `Conflict` to 409 and unknown codes to 404, and
//! redirects resolved codes.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
