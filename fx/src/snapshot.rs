//! Per-call exchange-rate snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use converter_common::{ConversionError, ConversionResult, Currency, Money};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Body shape of a `latest` rates response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: Option<HashMap<String, Decimal>>,
}

/// Rates relative to one base currency, valid for the current call only.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    /// Currency every rate is quoted against.
    pub base: Currency,
    /// Units of each currency per one unit of `base`.
    pub rates: HashMap<Currency, Decimal>,
    /// When the snapshot was taken.
    pub fetched_at: DateTime<Utc>,
    /// Name of the source that produced it.
    pub source: String,
}

impl RateSnapshot {
    /// Create a new snapshot.
    pub fn new(
        base: Currency,
        rates: HashMap<Currency, Decimal>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            base,
            rates,
            fetched_at: Utc::now(),
            source: source.into(),
        }
    }

    /// Parse a JSON response body carrying a `rates` object.
    pub fn from_json(base: Currency, body: &str, source: &str) -> ConversionResult<Self> {
        let response: LatestRatesResponse = serde_json::from_str(body)
            .map_err(|e| ConversionError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

        let rates = response.rates.ok_or_else(|| {
            ConversionError::MalformedResponse("response has no 'rates' object".to_string())
        })?;

        let rates = rates
            .into_iter()
            .map(|(code, rate)| (Currency::new(code), rate))
            .collect();

        Ok(Self::new(base, rates, source))
    }

    /// Rate for `quote`, if the snapshot lists it.
    pub fn rate(&self, quote: &Currency) -> Option<Decimal> {
        self.rates.get(quote).copied()
    }

    /// Convert `amount` of the base currency into `to`.
    pub fn convert(&self, amount: Decimal, to: &Currency) -> ConversionResult<Money> {
        let rate = self
            .rate(to)
            .ok_or_else(|| ConversionError::InvalidCurrencyCode(to.code().to_string()))?;
        Money::new(amount, to.clone())
            .checked_mul(rate)
            .ok_or_else(|| {
                ConversionError::InvalidValue(format!(
                    "amount too large for {}/{} at rate {}",
                    self.base, to, rate
                ))
            })
    }
}
