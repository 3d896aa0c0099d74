//! Celsius/Fahrenheit transforms.

use converter_common::{ConversionError, ConversionResult};

/// Temperature scales the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// Exact, case-sensitive symbol lookup.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.symbol() == symbol)
    }
}

/// Apply the formula for `from -> to`.
pub fn transform(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

/// Resolve both symbols and apply the transform.
///
/// Unknown symbols fail with `InvalidTemperatureConversion`, even when
/// `from == to`.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    match (TemperatureUnit::from_symbol(from), TemperatureUnit::from_symbol(to)) {
        (Some(f), Some(t)) => Ok(transform(value, f, t)),
        _ => Err(ConversionError::invalid_temperature(from, to)),
    }
}
