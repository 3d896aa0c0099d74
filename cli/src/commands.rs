//! Command handlers: normalise input, call the converters, render outcomes.

use converter_common::{ConversionOutcome, Currency, Money};
use converter_fx::ExchangeRateClient;
use converter_units::{convert, normalize_unit, Category};
use rust_decimal::Decimal;
use serde_json::{json, Value};

/// Convert between units of one category.
///
/// Unit text is normalised for the category first; an unknown category is
/// reported as an invalid conversion.
pub fn convert_units(category: &str, value: f64, from: &str, to: &str) -> ConversionOutcome<f64> {
    match category.parse::<Category>() {
        Ok(category) => {
            let from = normalize_unit(category, from);
            let to = normalize_unit(category, to);
            convert(category, value, &from, &to).into()
        }
        Err(e) => e.into(),
    }
}

/// Convert between currencies through `client`.
pub async fn convert_currency(
    client: &ExchangeRateClient,
    amount: Decimal,
    from: &str,
    to: &str,
) -> ConversionOutcome<Money> {
    client
        .get_rate(&Currency::new(from), &Currency::new(to), amount)
        .await
        .into()
}

/// Supported units per category plus featured currencies.
///
/// `filter` narrows the listing to one category (or `currency`).
pub fn list_units(filter: Option<&str>) -> ConversionOutcome<Value> {
    let currencies = json!(Currency::FEATURED);

    let Some(name) = filter else {
        let mut listing = serde_json::Map::new();
        for category in Category::ALL {
            listing.insert(category.name().to_string(), json!(category.units()));
        }
        listing.insert("Currency".to_string(), currencies);
        return ConversionOutcome::Success {
            value: Value::Object(listing),
        };
    };

    if name.trim().eq_ignore_ascii_case("currency") {
        return ConversionOutcome::Success {
            value: json!({ "Currency": currencies }),
        };
    }

    match name.parse::<Category>() {
        Ok(category) => ConversionOutcome::Success {
            value: json!({ category.name(): category.units() }),
        },
        Err(e) => e.into(),
    }
}

/// Format a float for people: at most six decimals, no trailing zeros.
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Render the listing as `Name: a, b, c` lines.
pub fn format_listing(listing: &Value) -> String {
    let Some(map) = listing.as_object() else {
        return listing.to_string();
    };

    map.iter()
        .map(|(name, units)| {
            let units: Vec<&str> = units
                .as_array()
                .map(|a| a.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            format!("{}: {}", name, units.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_fx::MockRateSource;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_convert_units_normalizes_input() {
        assert_eq!(
            convert_units("Length", 1000.0, " M", "KM "),
            ConversionOutcome::Success { value: 1.0 }
        );
        assert_eq!(
            convert_units("temperature", 0.0, "c", "°F"),
            ConversionOutcome::Success { value: 32.0 }
        );
    }

    #[test]
    fn test_convert_units_failures() {
        match convert_units("Length", 10.0, "km", "lightyear") {
            ConversionOutcome::Failure { kind, message } => {
                assert_eq!(kind, "INVALID_CONVERSION");
                assert!(message.contains("lightyear"));
            }
            other => panic!("expected failure, got {:?}", other),
        }

        assert!(matches!(
            convert_units("Temperature", 100.0, "k", "k"),
            ConversionOutcome::Failure { kind: "INVALID_TEMPERATURE_CONVERSION", .. }
        ));

        assert_eq!(
            convert_units("Volume", 1.0, "l", "ml"),
            ConversionOutcome::Failure {
                kind: "INVALID_CONVERSION",
                message: "Invalid conversion: unknown category 'Volume'".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_convert_currency() {
        let source = Arc::new(MockRateSource::new("mock"));
        source.set_rate(Currency::usd(), Currency::eur(), dec!(0.5));
        let client = ExchangeRateClient::new(source);

        let outcome = convert_currency(&client, dec!(10), "usd", "eur").await;
        assert_eq!(
            outcome,
            ConversionOutcome::Success {
                value: Money::new(dec!(5), Currency::eur())
            }
        );

        let outcome = convert_currency(&client, dec!(10), "USD", "ZZZ").await;
        assert!(matches!(
            outcome,
            ConversionOutcome::Failure { kind: "INVALID_CURRENCY_CODE", .. }
        ));
    }

    #[test]
    fn test_list_units() {
        let ConversionOutcome::Success { value } = list_units(None) else {
            panic!("full listing failed");
        };
        assert_eq!(value["Weight"], json!(["kg", "g", "mg", "lb", "oz"]));
        assert_eq!(value["Currency"], json!(["USD", "EUR", "PKR", "INR", "GBP"]));

        let ConversionOutcome::Success { value } = list_units(Some("temperature")) else {
            panic!("temperature listing failed");
        };
        assert_eq!(value, json!({ "Temperature": ["C", "F"] }));

        assert!(!list_units(Some("volume")).is_success());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.1 + 0.2), "0.3");
        assert_eq!(format_value(1609.344), "1609.344");
        assert_eq!(format_value(-40.0), "-40");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_format_listing() {
        let listing = json!({ "Temperature": ["C", "F"] });
        assert_eq!(format_listing(&listing), "Temperature: C, F");
    }
}
