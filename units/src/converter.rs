//! Category dispatch and value validation.

use converter_common::{ConversionError, ConversionResult};
use tracing::debug;

use crate::category::Category;
use crate::table::{UnitRatioTable, LENGTH, WEIGHT};
use crate::temperature::convert_temperature;

/// How a category turns one unit into another.
#[derive(Debug, Clone, Copy)]
pub enum ConversionStrategy {
    /// Multiply through a shared base unit.
    Ratio(&'static UnitRatioTable),
    /// Celsius/Fahrenheit formulas.
    Temperature,
}

impl ConversionStrategy {
    /// Strategy used by `category`.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Length => ConversionStrategy::Ratio(&LENGTH),
            Category::Weight => ConversionStrategy::Ratio(&WEIGHT),
            Category::Temperature => ConversionStrategy::Temperature,
        }
    }

    /// Whether negative inputs describe a real quantity under this strategy.
    pub fn allows_negative(&self) -> bool {
        matches!(self, ConversionStrategy::Temperature)
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Unit symbols are matched exactly; callers normalise user input first
/// (see [`crate::normalize_unit`]).
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> ConversionResult<f64> {
    let strategy = ConversionStrategy::for_category(category);
    validate_value(category, strategy, value)?;

    let result = match strategy {
        ConversionStrategy::Ratio(table) => {
            let (from, to) = table
                .ratio(from_unit)
                .zip(table.ratio(to_unit))
                .ok_or_else(|| {
                    ConversionError::invalid_conversion(category.name(), from_unit, to_unit)
                })?;
            value * (from / to)
        }
        ConversionStrategy::Temperature => convert_temperature(value, from_unit, to_unit)?,
    };

    if !result.is_finite() {
        return Err(ConversionError::InvalidValue(format!(
            "{} {} in {} is out of range",
            value, from_unit, to_unit
        )));
    }

    debug!(
        category = %category,
        value,
        from = from_unit,
        to = to_unit,
        result,
        "Converted units"
    );

    Ok(result)
}

fn validate_value(
    category: Category,
    strategy: ConversionStrategy,
    value: f64,
) -> ConversionResult<()> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(format!(
            "{} value must be a finite number, got {}",
            category, value
        )));
    }

    if value < 0.0 && !strategy.allows_negative() {
        return Err(ConversionError::InvalidValue(format!(
            "{} cannot be negative, got {}",
            category, value
        )));
    }

    Ok(())
}
