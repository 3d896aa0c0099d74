//! Exchange-rate client configuration.

use std::time::Duration;

use converter_common::{ConversionError, ConversionResult};

/// Endpoint queried when nothing else is configured.
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Configuration for the HTTP rate source.
#[derive(Debug, Clone)]
pub struct FxConfig {
    /// Base URL; the base currency code is appended as the last path segment.
    pub base_url: String,
    /// Upper bound on a single rate request.
    pub request_timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RATES_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            user_agent: concat!("converter-fx/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FxConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("FX_RATES_URL") {
            config.base_url = url;
        }

        if let Some(secs) = lookup("FX_TIMEOUT_SECS") {
            if let Ok(secs) = secs.trim().parse() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> ConversionResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConversionError::Configuration(
                "Rates URL cannot be empty".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConversionError::Configuration(format!(
                "Rates URL must use http or https: {}",
                url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(ConversionError::Configuration(
                "Request timeout cannot be zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = FxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_RATES_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("FX_RATES_URL", "http://localhost:9000/latest"),
            ("FX_TIMEOUT_SECS", "2"),
        ]
        .into_iter()
        .collect();

        let config = FxConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://localhost:9000/latest");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_unparseable_timeout_keeps_default() {
        let config = FxConfig::from_lookup(|key| {
            (key == "FX_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_config() {
        let config = FxConfig::default().with_base_url("");
        assert!(config.validate().is_err());

        let config = FxConfig::default().with_base_url("ftp://rates.example");
        assert!(config.validate().is_err());

        let config = FxConfig::default().with_timeout(Duration::ZERO);
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
