//! Error taxonomy shared by the unit converter and the exchange-rate client.

use thiserror::Error;

/// Every way a conversion can fail.
///
/// Both converters report failures through this type so the caller can
/// branch on the variant (or on [`ConversionError::error_code`]) instead of
/// inspecting the shape of the returned value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Category/unit combination not recognised.
    #[error("Invalid conversion: cannot convert {category} from '{from}' to '{to}'")]
    InvalidConversion {
        category: String,
        from: String,
        to: String,
    },

    /// Category name not recognised.
    #[error("Invalid conversion: unknown category '{0}'")]
    UnknownCategory(String),

    /// Temperature pair outside the supported Celsius/Fahrenheit set.
    #[error("Invalid temperature conversion: '{from}' to '{to}' is not supported")]
    InvalidTemperatureConversion { from: String, to: String },

    /// Transport failure or non-success status from the rate service.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Currency code malformed or absent from the fetched rates.
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Rate service answered, but the body could not be used.
    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),

    /// Input value rejected before any computation.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Client configuration rejected.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ConversionError {
    /// Get a stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConversionError::InvalidConversion { .. } | ConversionError::UnknownCategory(_) => {
                "INVALID_CONVERSION"
            }
            ConversionError::InvalidTemperatureConversion { .. } => {
                "INVALID_TEMPERATURE_CONVERSION"
            }
            ConversionError::NetworkError(_) => "NETWORK_ERROR",
            ConversionError::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            ConversionError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            ConversionError::InvalidValue(_) => "INVALID_VALUE",
            ConversionError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Shorthand for an unknown category/unit combination.
    pub fn invalid_conversion(
        category: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        ConversionError::InvalidConversion {
            category: category.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Shorthand for an unsupported temperature pair.
    pub fn invalid_temperature(from: impl Into<String>, to: impl Into<String>) -> Self {
        ConversionError::InvalidTemperatureConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_error_is_distinct() {
        let generic = ConversionError::invalid_conversion("Length", "km", "lightyear");
        let temperature = ConversionError::invalid_temperature("K", "K");

        assert_ne!(generic.error_code(), temperature.error_code());
        assert_eq!(temperature.error_code(), "INVALID_TEMPERATURE_CONVERSION");
    }

    #[test]
    fn test_error_messages() {
        let err = ConversionError::invalid_conversion("Length", "km", "lightyear");
        assert_eq!(
            err.to_string(),
            "Invalid conversion: cannot convert Length from 'km' to 'lightyear'"
        );

        let err = ConversionError::NetworkError("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
