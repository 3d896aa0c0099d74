//! Tagged conversion outcome for presentation layers.

use serde::Serialize;

use crate::error::{ConversionError, ConversionResult};

/// Success-with-value or failure-with-message, ready to render.
///
/// Front ends branch on the variant, never on the runtime type of the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome<T> {
    /// Conversion produced a value.
    Success { value: T },
    /// Conversion failed; `kind` is the error code.
    Failure { kind: &'static str, message: String },
}

impl<T> ConversionOutcome<T> {
    /// Check if the outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }

    /// Map the success value, keeping failures as-is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ConversionOutcome<U> {
        match self {
            ConversionOutcome::Success { value } => ConversionOutcome::Success { value: f(value) },
            ConversionOutcome::Failure { kind, message } => {
                ConversionOutcome::Failure { kind, message }
            }
        }
    }
}

impl<T> From<ConversionResult<T>> for ConversionOutcome<T> {
    fn from(result: ConversionResult<T>) -> Self {
        match result {
            Ok(value) => ConversionOutcome::Success { value },
            Err(err) => err.into(),
        }
    }
}

impl<T> From<ConversionError> for ConversionOutcome<T> {
    fn from(err: ConversionError) -> Self {
        ConversionOutcome::Failure {
            kind: err.error_code(),
            message: err.to_string(),
        }
    }
}
