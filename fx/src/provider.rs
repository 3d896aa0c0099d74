//! Rate source trait and test double.

use async_trait::async_trait;
use converter_common::{ConversionResult, Currency};

use crate::snapshot::RateSnapshot;

/// Anything that can produce a fresh rate snapshot for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Get the source name.
    fn name(&self) -> &str;

    /// Fetch the current rates quoted against `base`.
    async fn fetch_rates(&self, base: &Currency) -> ConversionResult<RateSnapshot>;
}

/// In-memory rate source for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateSource {
    name: String,
    rates: dashmap::DashMap<Currency, std::collections::HashMap<Currency, rust_decimal::Decimal>>,
    failure: parking_lot::Mutex<Option<converter_common::ConversionError>>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateSource {
    /// Create a new mock source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rates: dashmap::DashMap::new(),
            failure: parking_lot::Mutex::new(None),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Set the rate of `quote` per unit of `base`.
    pub fn set_rate(&self, base: Currency, quote: Currency, rate: rust_decimal::Decimal) {
        self.rates.entry(base).or_default().insert(quote, rate);
    }

    /// Make every following fetch fail with `error`.
    pub fn fail_with(&self, error: converter_common::ConversionError) {
        *self.failure.lock() = Some(error);
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateSource for MockRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self, base: &Currency) -> ConversionResult<RateSnapshot> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(err) = self.failure.lock().clone() {
            return Err(err);
        }

        // Providers answer unknown bases with an empty table rather than an error.
        let rates = self
            .rates
            .get(base)
            .map(|r| r.clone())
            .unwrap_or_default();

        Ok(RateSnapshot::new(base.clone(), rates, self.name.clone()))
    }
}
