//! Conversion categories and unit-symbol normalisation.

use std::fmt;
use std::str::FromStr;

use converter_common::ConversionError;
use serde::{Deserialize, Serialize};

use crate::table::{LENGTH, WEIGHT};
use crate::temperature::TemperatureUnit;

/// A family of units convertible into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Unit symbols recognised by this category.
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            Category::Length => LENGTH.symbols().collect(),
            Category::Weight => WEIGHT.symbols().collect(),
            Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
    }
}

/// Normalise free-form unit text the way a form front end should.
///
/// Ratio symbols are lowercase; temperature symbols are uppercase and may be
/// typed with a degree sign.
pub fn normalize_unit(category: Category, raw: &str) -> String {
    let trimmed = raw.trim();
    match category {
        Category::Length | Category::Weight => trimmed.to_lowercase(),
        Category::Temperature => trimmed.trim_start_matches('°').trim().to_uppercase(),
    }
}
