//! Converter FX Client
//!
//! Live exchange-rate lookup for currency conversion.
//!
//! # Features
//!
//! - One fresh rate fetch per conversion, bounded by a request timeout
//! - Pluggable rate sources behind the [`RateSource`] trait
//! - Every failure reported as a [`converter_common::ConversionError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use converter_fx::{ExchangeRateClient, FxConfig};
//! use converter_common::Currency;
//! use rust_decimal_macros::dec;
//!
//! let client = ExchangeRateClient::from_config(&FxConfig::from_env())?;
//! let eur = client.get_rate(&Currency::usd(), &Currency::eur(), dec!(100)).await?;
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod provider;
pub mod snapshot;

pub use client::ExchangeRateClient;
pub use config::{FxConfig, DEFAULT_RATES_URL};
pub use http::HttpRateSource;
pub use provider::RateSource;
pub use snapshot::RateSnapshot;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateSource;
