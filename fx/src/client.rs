//! Exchange-rate client: validate, fetch once, multiply.

use std::sync::Arc;

use converter_common::{ConversionError, ConversionResult, Currency, CurrencyPair, Money};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::config::FxConfig;
use crate::http::HttpRateSource;
use crate::provider::RateSource;

/// Converts amounts between currencies using a fresh snapshot per call.
///
/// Nothing is cached between calls and failures are never retried.
pub struct ExchangeRateClient {
    source: Arc<dyn RateSource>,
}

impl ExchangeRateClient {
    /// Create a new client over the given source.
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Create a client backed by the HTTP source described by `config`.
    pub fn from_config(config: &FxConfig) -> ConversionResult<Self> {
        Ok(Self::new(Arc::new(HttpRateSource::new(config)?)))
    }

    /// Convert `amount` of `from` into `to` at the current rate.
    #[instrument(skip_all, fields(from = %from, to = %to, amount = %amount))]
    pub async fn get_rate(
        &self,
        from: &Currency,
        to: &Currency,
        amount: Decimal,
    ) -> ConversionResult<Money> {
        let pair = CurrencyPair::new(from.clone(), to.clone());
        Self::validate(&pair, amount)?;

        if pair.is_identity() {
            debug!("Same currency, skipping rate lookup");
            return Ok(Money::new(amount, to.clone()));
        }

        let snapshot = self.source.fetch_rates(from).await.map_err(|e| {
            warn!(source = self.source.name(), error = %e, "Rate lookup failed");
            e
        })?;

        let converted = snapshot.convert(amount, to)?;

        info!(
            pair = %pair,
            source = %snapshot.source,
            fetched_at = %snapshot.fetched_at,
            result = %converted.value,
            "Conversion completed"
        );

        Ok(converted)
    }

    fn validate(pair: &CurrencyPair, amount: Decimal) -> ConversionResult<()> {
        for currency in [&pair.base, &pair.quote] {
            if !currency.is_well_formed() {
                return Err(ConversionError::InvalidCurrencyCode(currency.code().to_string()));
            }
        }

        if amount < Decimal::ZERO {
            return Err(ConversionError::InvalidValue(format!(
                "amount cannot be negative, got {}",
                amount
            )));
        }

        Ok(())
    }
}
