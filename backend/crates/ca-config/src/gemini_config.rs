use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_TOP_P: f32 = 0.95;

pub const MAX_MAX_OUTPUT_TOKENS: u32 = 65536;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Connection and sampling settings for the Gemini generateContent API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key. Never logged.
    pub api_key: Option<String>,
    /// Scheme and host, without the `/v1beta` path
    pub base_url: String,
    pub model: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_GEMINI_BASE_URL),
            model: String::from(DEFAULT_GEMINI_MODEL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::gemini(format!(
                "gemini.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::gemini("gemini.model must not be empty"));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::gemini(format!(
                "gemini.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ConfigError::gemini(format!(
                "gemini.temperature must be {}-{}, got {}",
                MIN_TEMPERATURE, MAX_TEMPERATURE, self.temperature
            )));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ConfigError::gemini(format!(
                "gemini.top_p must be 0-1, got {}",
                self.top_p
            )));
        }

        if self.top_k == 0 {
            return Err(ConfigError::gemini("gemini.top_k must be at least 1"));
        }

        if self.max_output_tokens == 0 || self.max_output_tokens > MAX_MAX_OUTPUT_TOKENS {
            return Err(ConfigError::gemini(format!(
                "gemini.max_output_tokens must be 1-{}, got {}",
                MAX_MAX_OUTPUT_TOKENS, self.max_output_tokens
            )));
        }

        Ok(())
    }

    /// True when a non-blank API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
