//! Error types for holidays-rs.
//!
//! Failures fall into two families that callers must be able to tell apart:
//!
//! * [`Error::InvalidArgument`]: the caller handed in something unusable
//!   (a null date, an empty dates driver, no regions, ...).  Raised before
//!   any rule is evaluated.
//! * [`Error::Computation`]: a rule could not produce a date for the
//!   year/month it was asked about (e.g. a fifth Monday in a four-Monday
//!   month).
//!
//! [`Error::Date`] is reported by the date primitives themselves; the rule
//! engine re-labels it as a computation error with the rule context attached.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller input failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A holiday rule could not be resolved to a valid date.
    #[error("computation error: {0}")]
    Computation(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Return `true` for [`Error::Computation`].
    pub fn is_computation(&self) -> bool {
        matches!(self, Error::Computation(_))
    }
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Argument check.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hd_core::{ensure, errors::Error};
/// fn month(m: u8) -> hd_core::errors::Result<u8> {
///     ensure!(m <= 12, "month selector {m} out of range [0, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Abort a rule evaluation.
///
/// Returns `Err(Error::Computation(...))` immediately.
///
/// # Example
/// ```
/// use hd_core::{fail, errors::Error};
/// fn never() -> hd_core::errors::Result<()> {
///     fail!("no such day");
/// }
/// assert!(matches!(never(), Err(Error::Computation(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Computation(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: usize) -> Result<usize> {
        ensure!(n > 0, "need at least one, got {n}");
        Ok(n)
    }

    #[test]
    fn ensure_maps_to_invalid_argument() {
        let err = checked(0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!err.is_computation());
        assert_eq!(err.to_string(), "invalid argument: need at least one, got 0");
    }

    #[test]
    fn fail_maps_to_computation() {
        fn boom() -> Result<()> {
            fail!("5th Monday of {}-{:02}", 2015, 2);
        }
        let err = boom().unwrap_err();
        assert!(err.is_computation());
        assert_eq!(err.to_string(), "computation error: 5th Monday of 2015-02");
    }
}
