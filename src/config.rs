//! Service configuration.
//!
//! Every external knob is read once at startup and injected into the
//! components that need it; nothing does ambient environment lookups at
//! request time.

use std::env;
use std::time::Duration;

use crate::Error;

const DEFAULT_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the analysis service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the classification gateway
    pub api_key: String,
    /// Chat-completions endpoint URL
    pub api_url: String,
    /// Model identifier sent with each classification request
    pub model: String,
    /// Upper bound for one classification call
    pub timeout: Duration,
    /// TCP port the HTTP server binds
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `SAFEURL_API_KEY` is required. `SAFEURL_API_URL`, `SAFEURL_MODEL`,
    /// `SAFEURL_TIMEOUT_SECS` and `PORT` are optional and default to the
    /// hosted deployment's gateway, model, a 10 second timeout and port
    /// 3000.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("SAFEURL_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration("SAFEURL_API_KEY is not configured".to_string())
            })?;

        let api_url =
            env::var("SAFEURL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("SAFEURL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = env::var("SAFEURL_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_key,
            api_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the fixed env var names are never touched concurrently
    #[test]
    fn test_from_env() {
        env::remove_var("SAFEURL_API_KEY");
        assert!(matches!(
            Config::from_env().unwrap_err(),
            Error::Configuration(_)
        ));

        env::set_var("SAFEURL_API_KEY", "");
        assert!(Config::from_env().is_err());

        env::set_var("SAFEURL_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.port, 3000);

        env::set_var("SAFEURL_TIMEOUT_SECS", "3");
        env::set_var("PORT", "8080");
        let config = Config::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.port, 8080);

        env::remove_var("SAFEURL_API_KEY");
        env::remove_var("SAFEURL_TIMEOUT_SECS");
        env::remove_var("PORT");
    }
}
