//! Contract-violation errors for the outcome type.
//!
//! A [`Result`](crate::Result) accessor that is called against the wrong
//! variant, or a direct accessor that finds an empty payload, signals
//! misuse rather than a modeled failure. The panicking accessors panic with
//! the [`Display`](std::fmt::Display) text of [`InvalidStateError`]; the
//! `try_*` accessors return it.

use std::fmt;

use crate::result::ResultType;

const OK_ACCESS_WHEN_ERR: &str = "Attempt to access ok value on error result";

const ERR_ACCESS_WHEN_OK: &str = "Attempt to access error value on ok result";

/// Describes an accessor call that the current [`Result`](crate::Result)
/// state does not support.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{InvalidStateError, Result, ResultType};
///
/// let result: Result<i32, String> = Result::err("boom".to_string());
/// let error = result.try_get_ok_or_none().unwrap_err();
///
/// assert_eq!(error, InvalidStateError::WrongVariant { requested: ResultType::Ok });
/// assert_eq!(
///     format!("{error}"),
///     "Attempt to access ok value on error result"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidStateError {
    /// A payload slot was read while the other variant is active.
    WrongVariant {
        /// The side the caller asked for.
        requested: ResultType,
    },
    /// A direct accessor was used and either the variant did not match or
    /// the matching payload was empty.
    DirectAccess {
        /// The side the caller asked for.
        requested: ResultType,
    },
}

impl InvalidStateError {
    /// Returns the side the rejected accessor asked for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{InvalidStateError, ResultType};
    ///
    /// let error = InvalidStateError::DirectAccess { requested: ResultType::Err };
    /// assert_eq!(error.requested(), ResultType::Err);
    /// ```
    #[inline]
    pub const fn requested(&self) -> ResultType {
        match self {
            Self::WrongVariant { requested } | Self::DirectAccess { requested } => *requested,
        }
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrong_variant = match self.requested() {
            ResultType::Ok => OK_ACCESS_WHEN_ERR,
            ResultType::Err => ERR_ACCESS_WHEN_OK,
        };
        match self {
            Self::WrongVariant { .. } => formatter.write_str(wrong_variant),
            Self::DirectAccess { requested } => {
                let fallback = match requested {
                    ResultType::Ok => "get_ok_or_none",
                    ResultType::Err => "get_err_or_none",
                };
                write!(
                    formatter,
                    "{wrong_variant} or attempt to access an empty value via a direct accessor; consider {fallback}"
                )
            }
        }
    }
}

impl std::error::Error for InvalidStateError {}
