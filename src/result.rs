//! Result type - an outcome fixed to OK or ERR at construction.
//!
//! This module provides [`Result<OkT, ErrT>`], which records whether an
//! operation succeeded and carries an independently typed payload for the
//! active side. Both sides may be empty: an OK result with no value and an
//! ERR result with no value are ordinary, well-formed outcomes. "Has a
//! value" and "is a success" are separate questions.
//!
//! Payload access is guarded. Every accessor named after one side checks the
//! variant first; calling it against the other side is a programmer error
//! and panics (or, for the `try_*` forms, returns an [`InvalidStateError`]).
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{Result, ResultType};
//!
//! let parsed: Result<i32, String> = Result::ok(42);
//! assert!(parsed.is_ok());
//! assert_eq!(parsed.result_type(), ResultType::Ok);
//! assert_eq!(parsed.get_ok(), &42);
//!
//! // An error without any payload is still an error.
//! let failed: Result<i32, String> = Result::err_empty();
//! assert!(failed.is_err());
//! assert!(failed.is_empty());
//! assert_eq!(failed.get_err_or_none(), None);
//!
//! // Branch once, with both payloads visible as `Option`s.
//! failed.if_ok_or_else(
//!     |_| unreachable!(),
//!     |error| assert!(error.is_none()),
//! );
//! ```

use std::fmt;

use crate::error::InvalidStateError;

/// The variant tag of a [`Result`].
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Result, ResultType};
///
/// let result: Result<(), ()> = Result::err_empty();
/// assert_eq!(result.result_type(), ResultType::Err);
/// assert_eq!(ResultType::Err.to_string(), "ERR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultType {
    /// Success.
    Ok,
    /// Failure.
    Err,
}

impl fmt::Display for ResultType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => formatter.write_str("OK"),
            Self::Err => formatter.write_str("ERR"),
        }
    }
}

// Only the active side is stored, so the inactive slot cannot be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Payload<OkT, ErrT> {
    Ok(Option<OkT>),
    Err(Option<ErrT>),
}

/// An outcome tagged OK or ERR, each side with an optional payload.
///
/// The variant is chosen by the factory that built the value and never
/// changes afterwards; there are no mutating methods. A `Result` is
/// therefore safe to share between readers once built.
///
/// # Type Parameters
///
/// * `OkT` - The type of the success payload
/// * `ErrT` - The type of the error payload
///
/// # Examples
///
/// ```rust
/// use maybe_result::Result;
///
/// let result: Result<String, u16> = Result::err(404);
/// assert_eq!(result.get_err(), &404);
/// assert_eq!(result.get_err_or_default(Some(&500)), Some(&404));
/// assert!(result.try_get_ok().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Result<OkT, ErrT> {
    payload: Payload<OkT, ErrT>,
}

static_assertions::assert_impl_all!(Result<String, String>: Send, Sync);

/// Generates the guarded accessors for one side of a [`Result`].
///
/// Both sides share the same contract, mirrored: `$side` is the method-name
/// fragment, `$variant` the `Payload`/`ResultType` variant and `$payload`
/// the payload type parameter.
macro_rules! slot_accessors {
    ($side:ident, $variant:ident, $payload:ident, $label:literal) => {
        paste::paste! {
            #[doc = concat!("Returns the ", $label, " payload, which may be empty.")]
            ///
            /// # Errors
            ///
            /// Returns [`InvalidStateError::WrongVariant`] when the other
            /// variant is active.
            #[inline]
            pub const fn [<try_get_ $side _or_none>](
                &self,
            ) -> std::result::Result<Option<&$payload>, InvalidStateError> {
                match &self.payload {
                    Payload::$variant(value) => Ok(value.as_ref()),
                    _ => Err(InvalidStateError::WrongVariant {
                        requested: ResultType::$variant,
                    }),
                }
            }

            #[doc = concat!("Returns the ", $label, " payload, requiring it to be present.")]
            ///
            /// # Errors
            ///
            /// Returns [`InvalidStateError::DirectAccess`] when the other
            /// variant is active or the payload is empty.
            #[inline]
            pub const fn [<try_get_ $side>](
                &self,
            ) -> std::result::Result<&$payload, InvalidStateError> {
                match &self.payload {
                    Payload::$variant(Some(value)) => Ok(value),
                    _ => Err(InvalidStateError::DirectAccess {
                        requested: ResultType::$variant,
                    }),
                }
            }

            #[doc = concat!("Returns the ", $label, " payload, or `None` if the payload is empty.")]
            ///
            /// # Panics
            ///
            /// Panics if the other variant is active.
            #[inline]
            pub fn [<get_ $side _or_none>](&self) -> Option<&$payload> {
                self.[<try_get_ $side _or_none>]()
                    .unwrap_or_else(|error| panic!("{error}"))
            }

            #[doc = concat!("Returns the ", $label, " payload, or `fallback` if the payload is empty.")]
            ///
            /// The fallback does not relax the variant check.
            ///
            /// # Panics
            ///
            /// Panics if the other variant is active.
            #[inline]
            pub fn [<get_ $side _or_default>]<'a>(
                &'a self,
                fallback: Option<&'a $payload>,
            ) -> Option<&'a $payload> {
                self.[<get_ $side _or_none>]().or(fallback)
            }

            #[doc = concat!("Returns the ", $label, " payload.")]
            ///
            /// # Panics
            ///
            /// Panics if the other variant is active or the payload is
            /// empty.
            #[inline]
            pub fn [<get_ $side>](&self) -> &$payload {
                self.[<try_get_ $side>]()
                    .unwrap_or_else(|error| panic!("{error}"))
            }

            #[doc = concat!("Returns an owned copy of the ", $label, " payload, if any.")]
            ///
            /// # Panics
            ///
            /// Panics if the other variant is active.
            #[inline]
            pub fn [<get_ $side _opt>](&self) -> Option<$payload>
            where
                $payload: Clone,
            {
                self.[<get_ $side _or_none>]().cloned()
            }

            #[doc = concat!("Calls `action` with the ", $label, " payload when that variant is active.")]
            #[inline]
            pub fn [<if_ $side>]<F>(&self, action: F)
            where
                F: FnOnce(Option<&$payload>),
            {
                if let Payload::$variant(value) = &self.payload {
                    action(value.as_ref());
                }
            }

            #[doc = concat!("Returns `true` if the ", $label, " slot holds no value.")]
            ///
            /// The variant is not checked; the inactive slot is always empty.
            #[inline]
            pub const fn [<is_ $side _value_none>](&self) -> bool {
                !matches!(&self.payload, Payload::$variant(Some(_)))
            }
        }
    };
}

impl<OkT, ErrT> Result<OkT, ErrT> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an OK result carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// let result: Result<i32, ()> = Result::ok(1);
    /// assert!(result.is_ok());
    /// assert!(result.is_present());
    /// ```
    #[inline]
    pub const fn ok(value: OkT) -> Self {
        Self {
            payload: Payload::Ok(Some(value)),
        }
    }

    /// Creates an OK result with no payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// let result: Result<i32, ()> = Result::ok_empty();
    /// assert!(result.is_ok());
    /// assert!(result.is_ok_value_none());
    /// assert_eq!(result.get_ok_or_none(), None);
    /// ```
    #[inline]
    pub const fn ok_empty() -> Self {
        Self {
            payload: Payload::Ok(None),
        }
    }

    /// Creates an OK result from a payload that may be absent.
    #[inline]
    pub const fn ok_optional(value: Option<OkT>) -> Self {
        Self {
            payload: Payload::Ok(value),
        }
    }

    /// Creates an ERR result carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// let result: Result<(), &str> = Result::err("denied");
    /// assert!(result.is_err());
    /// assert_eq!(result.get_err(), &"denied");
    /// ```
    #[inline]
    pub const fn err(value: ErrT) -> Self {
        Self {
            payload: Payload::Err(Some(value)),
        }
    }

    /// Creates an ERR result with no payload.
    #[inline]
    pub const fn err_empty() -> Self {
        Self {
            payload: Payload::Err(None),
        }
    }

    /// Creates an ERR result from a payload that may be absent.
    #[inline]
    pub const fn err_optional(value: Option<ErrT>) -> Self {
        Self {
            payload: Payload::Err(value),
        }
    }

    // =========================================================================
    // Variant Queries
    // =========================================================================

    /// Returns `true` if this is an OK result.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self.payload, Payload::Ok(_))
    }

    /// Returns `true` if this is an ERR result.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self.payload, Payload::Err(_))
    }

    /// Returns the variant tag.
    #[inline]
    pub const fn result_type(&self) -> ResultType {
        match self.payload {
            Payload::Ok(_) => ResultType::Ok,
            Payload::Err(_) => ResultType::Err,
        }
    }

    // =========================================================================
    // Payload Presence
    // =========================================================================

    /// Returns `true` if neither slot holds a value, whatever the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// assert!(Result::<i32, i32>::ok_empty().is_empty());
    /// assert!(Result::<i32, i32>::err_empty().is_empty());
    /// assert!(!Result::<i32, i32>::err(7).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.payload, Payload::Ok(None) | Payload::Err(None))
    }

    /// Returns `true` if either slot holds a value, whatever the variant.
    #[inline]
    pub const fn is_present(&self) -> bool {
        !self.is_empty()
    }

    // =========================================================================
    // Guarded Accessors
    // =========================================================================

    slot_accessors!(ok, Ok, OkT, "ok");
    slot_accessors!(err, Err, ErrT, "error");

    /// Calls exactly one of the two actions, chosen by the variant.
    ///
    /// The chosen action receives the active payload, which may be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// let result: Result<i32, String> = Result::ok(3);
    /// let mut seen = None;
    /// result.if_ok_or_else(|value| seen = value.copied(), |_| unreachable!());
    /// assert_eq!(seen, Some(3));
    /// ```
    #[inline]
    pub fn if_ok_or_else<F, G>(&self, ok_action: F, err_action: G)
    where
        F: FnOnce(Option<&OkT>),
        G: FnOnce(Option<&ErrT>),
    {
        match &self.payload {
            Payload::Ok(value) => ok_action(value.as_ref()),
            Payload::Err(value) => err_action(value.as_ref()),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a standard library result, keeping empty payloads as
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the error payload when this is an ERR result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Result;
    ///
    /// assert_eq!(Result::<i32, ()>::ok(1).into_std(), Ok(Some(1)));
    /// assert_eq!(Result::<i32, ()>::err_empty().into_std(), Err(None));
    /// ```
    #[inline]
    pub fn into_std(self) -> std::result::Result<Option<OkT>, Option<ErrT>> {
        match self.payload {
            Payload::Ok(value) => Ok(value),
            Payload::Err(value) => Err(value),
        }
    }
}

impl<OkT, ErrT> From<std::result::Result<OkT, ErrT>> for Result<OkT, ErrT> {
    fn from(result: std::result::Result<OkT, ErrT>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(value) => Self::err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn ok_sets_variant_and_payload() {
        let result: Result<i32, String> = Result::ok(42);
        assert!(result.is_ok());
        assert!(!result.is_err());
        assert_eq!(result.result_type(), ResultType::Ok);
        assert_eq!(result.get_ok(), &42);
    }

    #[rstest]
    fn err_sets_variant_and_payload() {
        let result: Result<i32, String> = Result::err("boom".to_string());
        assert!(result.is_err());
        assert!(!result.is_ok());
        assert_eq!(result.result_type(), ResultType::Err);
        assert_eq!(result.get_err(), "boom");
    }

    #[rstest]
    #[case(Result::ok_optional(None), true)]
    #[case(Result::ok_optional(Some(1)), true)]
    #[case(Result::err_optional(None), false)]
    #[case(Result::err_optional(Some(1)), false)]
    fn optional_factories_keep_variant(#[case] result: Result<i32, i32>, #[case] is_ok: bool) {
        assert_eq!(result.is_ok(), is_ok);
    }

    #[rstest]
    fn returns_correct_type() {
        let ok: Result<(), ()> = Result::ok_empty();
        let err: Result<(), ()> = Result::err_empty();
        assert_eq!(ok.result_type(), ResultType::Ok);
        assert_eq!(err.result_type(), ResultType::Err);
    }

    // =========================================================================
    // Slot Queries
    // =========================================================================

    #[rstest]
    #[case(Result::ok(1), false, true)]
    #[case(Result::ok_empty(), true, true)]
    #[case(Result::err(1), true, false)]
    #[case(Result::err_empty(), true, true)]
    fn slot_nullity(
        #[case] result: Result<i32, i32>,
        #[case] ok_none: bool,
        #[case] err_none: bool,
    ) {
        assert_eq!(result.is_ok_value_none(), ok_none);
        assert_eq!(result.is_err_value_none(), err_none);
        assert_eq!(result.is_empty(), ok_none && err_none);
        assert_eq!(result.is_present(), !result.is_empty());
    }

    // =========================================================================
    // Guarded Accessors
    // =========================================================================

    #[rstest]
    fn get_ok_or_default_prefers_payload() {
        let result: Result<i32, ()> = Result::ok(1);
        assert_eq!(result.get_ok_or_default(Some(&9)), Some(&1));
    }

    #[rstest]
    fn get_ok_or_default_uses_fallback_when_empty() {
        let result: Result<i32, ()> = Result::ok_empty();
        assert_eq!(result.get_ok_or_default(Some(&9)), Some(&9));
        assert_eq!(result.get_ok_or_default(None), None);
    }

    #[rstest]
    fn get_err_opt_clones_payload() {
        let result: Result<(), String> = Result::err("bad".to_string());
        assert_eq!(result.get_err_opt(), Some("bad".to_string()));
    }

    #[rstest]
    fn try_get_ok_reports_direct_access_on_empty() {
        let result: Result<i32, ()> = Result::ok_empty();
        assert_eq!(
            result.try_get_ok(),
            Err(InvalidStateError::DirectAccess {
                requested: ResultType::Ok
            })
        );
        assert_eq!(result.try_get_ok_or_none(), Ok(None));
    }

    #[rstest]
    fn try_get_err_or_none_reports_wrong_variant() {
        let result: Result<i32, i32> = Result::ok(1);
        assert_eq!(
            result.try_get_err_or_none(),
            Err(InvalidStateError::WrongVariant {
                requested: ResultType::Err
            })
        );
    }

    #[rstest]
    #[should_panic(expected = "Attempt to access ok value on error result")]
    fn get_ok_or_none_panics_on_err() {
        let result: Result<i32, i32> = Result::err(1);
        let _ = result.get_ok_or_none();
    }

    #[rstest]
    #[should_panic(expected = "consider get_err_or_none")]
    fn get_err_panics_on_empty_err() {
        let result: Result<i32, i32> = Result::err_empty();
        let _ = result.get_err();
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    #[rstest]
    fn if_ok_skips_err() {
        let result: Result<i32, i32> = Result::err(1);
        let mut called = false;
        result.if_ok(|_| called = true);
        assert!(!called);
    }

    #[rstest]
    fn if_err_passes_empty_payload() {
        let result: Result<i32, i32> = Result::err_empty();
        let mut seen = Some(Some(0));
        result.if_err(|value| seen = Some(value.copied()));
        assert_eq!(seen, Some(None));
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    #[rstest]
    fn from_std_result() {
        let ok: Result<i32, String> = Ok(1).into();
        let err: Result<i32, String> = Err("e".to_string()).into();
        assert_eq!(ok, Result::ok(1));
        assert_eq!(err, Result::err("e".to_string()));
    }

    #[rstest]
    fn result_type_display() {
        assert_eq!(ResultType::Ok.to_string(), "OK");
        assert_eq!(ResultType::Err.to_string(), "ERR");
    }
}
