use rust_decimal::Decimal;
use thiserror::Error;

/// A user-supplied figure that no calculator will accept.
///
/// Every calculator validates all of its inputs before computing anything and
/// reports the first offending field through this type. Callers are expected
/// to show a neutral "please provide valid input" prompt and ask again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// The field was left empty.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// The field could not be read as a number.
    #[error("{field} is not a valid number: '{input}'")]
    NotANumber { field: &'static str, input: String },

    /// The host handed over `NaN` or an infinity.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// The field must be strictly greater than zero.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: Decimal },

    /// The field may be zero but not negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// The field is above its upper bound, e.g. a percentage over 100.
    #[error("{field} must not exceed {limit}, got {value}")]
    TooLarge {
        field: &'static str,
        value: Decimal,
        limit: Decimal,
    },

    /// The figure is valid on its own but the calculation exceeds what a
    /// `Decimal` can hold.
    #[error("{field} is outside the range that can be calculated")]
    OutOfRange { field: &'static str },
}

impl InvalidInput {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::TooLarge { field, .. }
            | Self::OutOfRange { field } => field,
        }
    }
}

/// Rejects zero and negative amounts.
pub(crate) fn require_positive(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, InvalidInput> {
    if value <= Decimal::ZERO {
        tracing::warn!(field, value = %value, "rejecting non-positive amount");
        return Err(InvalidInput::NotPositive { field, value });
    }
    Ok(value)
}

/// Rejects negative amounts; zero passes.
pub(crate) fn require_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, InvalidInput> {
    if value < Decimal::ZERO {
        tracing::warn!(field, value = %value, "rejecting negative amount");
        return Err(InvalidInput::Negative { field, value });
    }
    Ok(value)
}

/// Turns the `None` of a checked `Decimal` operation into
/// [`InvalidInput::OutOfRange`] against `field`.
pub(crate) fn in_range(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, InvalidInput> {
    value.ok_or_else(|| {
        tracing::warn!(field, "calculation overflowed");
        InvalidInput::OutOfRange { field }
    })
}
