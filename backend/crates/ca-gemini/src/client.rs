use crate::wire::ErrorEnvelope;
use crate::{
    API_KEY_HEADER, GeminiError, GeminiResult, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, TextGenerator, retry_hint,
};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use ca_config::GeminiConfig;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;

/// Upstream error bodies longer than this are cut before logging or wrapping
const MAX_ERROR_BODY_CHARS: usize = 500;

/// HTTP client for the Gemini `generateContent` REST API
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    generation_config: GenerationConfig,
    client: ReqwestClient,
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// A missing API key is not an error here; each call reports it instead.
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config
                .api_key
                .as_ref()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            generation_config: GenerationConfig::from(config),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send a single prompt and return the first candidate's text.
    ///
    /// Returns an empty string when the API answers without candidates.
    pub async fn generate_text(&self, prompt: &str) -> GeminiResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GeminiError::MissingApiKey {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let body = GenerateContentRequest::from_prompt(prompt, self.generation_config);

        log::debug!(
            "POST {} ({} prompt chars)",
            self.endpoint(),
            prompt.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        let output = parsed.text();
        if output.is_empty() {
            log::warn!("Gemini returned no candidate text");
        }
        Ok(output)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        self.generate_text(prompt).await
    }
}

/// Classify a non-success response, reading the Google error envelope when present
#[track_caller]
fn error_from_body(status: u16, body: &str) -> GeminiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let hint = retry_hint(&envelope.error.details, &envelope.error.message);
            let message = if envelope.error.message.is_empty() {
                truncate(body)
            } else {
                envelope.error.message
            };
            GeminiError::from_status(status, message, hint)
        }
        Err(_) => {
            let message = truncate(body);
            let hint = retry_hint(&[], &message);
            GeminiError::from_status(status, message, hint)
        }
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
