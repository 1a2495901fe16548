use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_MODEL: &str = "openrouter/auto";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
}

/// Provider settings for the OpenAI-compatible chat client.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub http_referer: Option<String>,
    pub app_title: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub port: u16,
    pub llm: LlmSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENROUTER_API_KEY").ok_or(ConfigError::Missing("OPENROUTER_API_KEY"))?;
        let port = parse_or("PORT", non_empty("PORT"), DEFAULT_PORT);
        let timeout_secs = parse_or("LLM_TIMEOUT_SECS", non_empty("LLM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            llm: LlmSettings {
                api_key,
                model: non_empty("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: non_empty("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                http_referer: non_empty("OPENROUTER_HTTP_REFERER"),
                app_title: non_empty("OPENROUTER_APP_TITLE"),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, value, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = settings_from(&[("OPENROUTER_API_KEY", "sk-test")]).unwrap();

        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(settings.llm.model, DEFAULT_MODEL);
        assert_eq!(settings.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.llm.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(settings.llm.http_referer.is_none());
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = settings_from(&[("OPENROUTER_API_KEY", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENROUTER_API_KEY")));
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let settings = settings_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("PORT", "eighty"),
            ("LLM_TIMEOUT_SECS", "15"),
            ("OPENROUTER_APP_TITLE", "Quick Replies"),
        ])
        .unwrap();

        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.llm.timeout, Duration::from_secs(15));
        assert_eq!(settings.llm.app_title.as_deref(), Some("Quick Replies"));
    }
}
