//! HTTP rate source for `latest/<BASE>` style endpoints.

use async_trait::async_trait;
use converter_common::{ConversionError, ConversionResult, Currency};
use reqwest::Client;
use tracing::debug;

use crate::config::FxConfig;
use crate::provider::RateSource;
use crate::snapshot::RateSnapshot;

const SOURCE_NAME: &str = "HTTP";

/// Fetches rates with one GET per call: `{base_url}/{BASE}`.
pub struct HttpRateSource {
    client: Client,
    base_url: String,
}

impl HttpRateSource {
    /// Create a new HTTP source from validated configuration.
    pub fn new(config: &FxConfig) -> ConversionResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConversionError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// URL queried for `base`.
    pub fn url_for(&self, base: &Currency) -> String {
        format!("{}/{}", self.base_url, base.code())
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_rates(&self, base: &Currency) -> ConversionResult<RateSnapshot> {
        let url = self.url_for(base);
        debug!(url = %url, "Fetching rates");

        let response = self.client.get(&url).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConversionError::NetworkError(format!(
                "rate service returned {} for {}",
                status, url
            )));
        }

        let body = response.text().await.map_err(network_error)?;
        let snapshot = RateSnapshot::from_json(base.clone(), &body, SOURCE_NAME)?;

        debug!(url = %url, rates = snapshot.rates.len(), "Fetched rates");
        Ok(snapshot)
    }
}

fn network_error(err: reqwest::Error) -> ConversionError {
    if err.is_timeout() {
        ConversionError::NetworkError(format!("request timed out: {}", err))
    } else {
        ConversionError::NetworkError(err.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{hang, serve_once};
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn source_for(url: &str) -> HttpRateSource {
        HttpRateSource::new(&FxConfig::default().with_base_url(url)).unwrap()
    }

    #[test]
    fn test_url_for_base() {
        let source = source_for("https://rates.example/v4/latest/");
        assert_eq!(
            source.url_for(&Currency::usd()),
            "https://rates.example/v4/latest/USD"
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FxConfig::default().with_base_url("not a url");
        assert!(HttpRateSource::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_fetch_rates() {
        let (url, server) = serve_once("200 OK", r#"{"base":"USD","rates":{"EUR":0.5,"GBP":0.75}}"#).await;

        let snapshot = source_for(&url).fetch_rates(&Currency::usd()).await.unwrap();

        assert_eq!(snapshot.rate(&Currency::eur()), Some(dec!(0.5)));
        assert_eq!(snapshot.rate(&Currency::gbp()), Some(dec!(0.75)));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /v4/latest/USD HTTP/1.1"), "{}", request);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (url, _server) = serve_once("404 Not Found", r#"{"error":"unknown base"}"#).await;

        let err = source_for(&url).fetch_rates(&Currency::new("ZZZ")).await.unwrap_err();

        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(err.to_string().contains("404"), "{}", err);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (url, _server) = serve_once("200 OK", "not json").await;

        let err = source_for(&url).fetch_rates(&Currency::usd()).await.unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_RESPONSE");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(&format!("http://{}", addr))
            .fetch_rates(&Currency::usd())
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::NetworkError(_)));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let (url, _server) = hang().await;
        let config = FxConfig::default()
            .with_base_url(url)
            .with_timeout(Duration::from_millis(200));

        let err = HttpRateSource::new(&config)
            .unwrap()
            .fetch_rates(&Currency::usd())
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(err.to_string().contains("timed out"), "{}", err);
    }
}
