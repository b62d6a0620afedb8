use thiserror::Error;

/// Rejections raised while checking a password request before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("length must be at least 1")]
    LengthTooShort,

    #[error("minimum and maximum values cannot be negative")]
    NegativeBound,

    #[error("minimum numeric count exceeds maximum")]
    NumericBoundsInverted,

    #[error("minimum special count exceeds maximum")]
    SpecialBoundsInverted,

    #[error("sum of minimums exceeds total length")]
    MinimumsExceedLength,

    #[error("value {0} is too large for this platform")]
    TooLarge(i64),
}
