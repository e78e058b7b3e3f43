use ca_gemini::TextGenerator;

use std::sync::Arc;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Model backend, usually a retrying Gemini client
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}
