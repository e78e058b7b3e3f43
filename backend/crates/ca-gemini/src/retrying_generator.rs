use crate::{GeminiResult, RetryPolicy, TextGenerator, with_retry};

use async_trait::async_trait;

/// Wraps a generator so rate-limited calls are retried with backoff
pub struct RetryingGenerator<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: TextGenerator> RetryingGenerator<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for RetryingGenerator<G> {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        with_retry(&self.policy, "Gemini generateContent", || {
            self.inner.generate(prompt)
        })
        .await
    }
}
