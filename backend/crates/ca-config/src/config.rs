use crate::{
    CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, GeminiConfig,
    LoggingConfig, RetryConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub gemini: GeminiConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CA_CONFIG_DIR env var, else use ./.ca/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply legacy GEMINI_API_KEY / PORT variables
    /// 4. Apply CA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_legacy_env();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CA_CONFIG_DIR env var > ./.ca/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("CA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.gemini.validate()?;
        self.retry.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  gemini: model={}, base_url={}, timeout={}s, api_key={}",
            self.gemini.model,
            self.gemini.base_url,
            self.gemini.timeout_secs,
            if self.gemini.has_api_key() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}, worst-case wait={}s",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter,
            self.retry.worst_case_wait().as_secs()
        );

        if !self.gemini.has_api_key() {
            warn!("No Gemini API key configured; AI endpoints will return errors");
        }
    }

    /// Variables understood by earlier deployments of the service
    fn apply_legacy_env(&mut self) {
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.gemini.api_key);
        Self::apply_env_parse("PORT", &mut self.server.port);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CA_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("CA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CA_LOG_FILE", &mut self.logging.file);

        // Gemini
        Self::apply_env_option_string("CA_GEMINI_API_KEY", &mut self.gemini.api_key);
        Self::apply_env_string("CA_GEMINI_BASE_URL", &mut self.gemini.base_url);
        Self::apply_env_string("CA_GEMINI_MODEL", &mut self.gemini.model);
        Self::apply_env_parse("CA_GEMINI_TIMEOUT_SECS", &mut self.gemini.timeout_secs);
        Self::apply_env_parse("CA_GEMINI_TEMPERATURE", &mut self.gemini.temperature);

        // Retry
        Self::apply_env_parse("CA_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "CA_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("CA_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "CA_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("CA_RETRY_JITTER", &mut self.retry.jitter);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
