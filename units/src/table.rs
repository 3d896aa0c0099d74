//! Static unit-ratio tables for the ratio-based categories.

/// Symbol to multiplier mapping, expressed in base units per symbol.
#[derive(Debug)]
pub struct UnitRatioTable {
    /// Symbol of the unit every ratio is relative to.
    pub base: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl UnitRatioTable {
    const fn new(base: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { base, entries }
    }

    /// Multiplier for `symbol`, if the table knows it. Case-sensitive.
    pub fn ratio(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, ratio)| *ratio)
    }

    /// Symbols in table order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }

    /// Iterate over `(symbol, multiplier)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Length, in metres.
pub static LENGTH: UnitRatioTable = UnitRatioTable::new(
    "m",
    &[
        ("km", 1000.0),
        ("m", 1.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("mi", 1609.344),
        ("yd", 0.9144),
        ("ft", 0.3048),
        ("in", 0.0254),
    ],
);

/// Weight, in grams.
pub static WEIGHT: UnitRatioTable = UnitRatioTable::new(
    "g",
    &[
        ("kg", 1000.0),
        ("g", 1.0),
        ("mg", 0.001),
        ("lb", 453.59237),
        ("oz", 28.349523125),
    ],
);
