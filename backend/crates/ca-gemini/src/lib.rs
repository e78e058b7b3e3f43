mod client;
mod error;
mod retry;
mod retry_hint;
mod retrying_generator;
mod text_generator;
mod wire;


pub use client::GeminiClient;
pub use error::{GeminiError, Result as GeminiResult};
pub use retry::{IsRetryable, RetryPolicy, with_retry};
pub use retry_hint::retry_hint;
pub use retrying_generator::RetryingGenerator;
pub use text_generator::TextGenerator;
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";
