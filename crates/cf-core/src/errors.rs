//! Error types for comfut-rs.
//!
//! All failures in this library are synchronous and fail-fast: an operation
//! either completes against a fully validated configuration or returns one of
//! the variants below.  Nothing is retried and nothing degrades silently.

use thiserror::Error;

/// The top-level error type used throughout comfut-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required value (evaluation date, delivery date, spot, pricing mode)
    /// was never set, or an accessor was invoked before configuration.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Malformed setter input: mismatched sequence lengths, fewer than two
    /// points, or non-increasing dates.  The operation rejects the input
    /// before mutating any state.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A curve or anchor range does not span the date needed for the
    /// requested computation, or a curve lacks extrapolation permission
    /// beyond its domain.
    #[error("coverage error: {0}")]
    Coverage(String),

    /// A contract profile was asked to price a pricing/averaging mode
    /// combination it does not support.
    #[error("mode mismatch: {0}")]
    ModeMismatch(String),

    /// A business-day averaging window contained zero business days.
    #[error("no business day: {0}")]
    NoBusinessDay(String),

    /// Dispatch encountered a mode value outside the closed enum set.
    ///
    /// Exhaustive matching over the mode enums makes this unconstructible
    /// from safe code in this workspace; the variant is retained so callers
    /// matching on [`Error`] have a stable contract for corrupted-state
    /// reports.
    #[error("unreachable mode: {0}")]
    UnreachableMode(String),

    /// Date construction or parsing error.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout comfut-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cf_core::ensure;
/// fn positive(x: f64) -> cf_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cf_core::validate;
/// fn paired(xs: &[f64], ys: &[f64]) -> cf_core::Result<()> {
///     validate!(xs.len() == ys.len(), "length mismatch");
///     Ok(())
/// }
/// assert!(paired(&[1.0], &[2.0]).is_ok());
/// assert!(paired(&[1.0], &[]).is_err());
/// ```
#[macro_export]
macro_rules! validate {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}
