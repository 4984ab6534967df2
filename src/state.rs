//! Shared state handed to every handler.

use std::sync::Arc;

use crate::application::strategies::UrlStrategy;

#[derive(Clone)]
pub struct AppState {
    pub strategy: Arc<dyn UrlStrategy>,
}

impl AppState {
    pub fn new(strategy: Arc<dyn UrlStrategy>) -> Self {
        Self { strategy }
    }
}
