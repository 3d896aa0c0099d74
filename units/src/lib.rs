//! Converter Units
//!
//! Pure conversion between units of length, weight and temperature.
//!
//! # Features
//!
//! - Static ratio tables for length (metres) and weight (grams)
//! - Celsius/Fahrenheit formulas for temperature
//! - One closed strategy per category, dispatched by `match`
//!
//! # Example
//!
//! ```rust
//! use converter_units::{convert, Category};
//!
//! let km = convert(Category::Length, 1000.0, "m", "km").unwrap();
//! assert_eq!(km, 1.0);
//! ```

pub mod category;
pub mod converter;
pub mod table;
pub mod temperature;

pub use category::{normalize_unit, Category};
pub use converter::{convert, ConversionStrategy};
pub use table::{UnitRatioTable, LENGTH, WEIGHT};
pub use temperature::TemperatureUnit;
