use crate::GeminiResult;

use async_trait::async_trait;

/// Something that turns a prompt into model text.
///
/// The server only talks to this trait, so tests can swap in a scripted fake.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GeminiResult<String>;
}
