//! Maybe type - a container holding zero or one value.
//!
//! [`Maybe<T>`] wraps an `Option<T>` and adds transformation chains that
//! do not force the caller to branch on presence at every step:
//!
//! - `transform` / `transform_in_place` apply a function to the raw payload
//!   unconditionally; the function itself decides what absence means.
//! - `transform_if_present` / `transform_if_present_in_place` only run the
//!   function when a value is there.
//!
//! The consuming operations return a new container. The `*_in_place`
//! operations overwrite the payload and return `&mut Self`, so they chain on
//! one receiver.
//!
//! A `Maybe` converts into a [`Result`]: a present value becomes an OK
//! result, absence becomes an ERR result without payload.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::Maybe;
//!
//! let mut maybe = Maybe::wrap(Some(5));
//! maybe
//!     .transform_if_present_in_place(|x| x * 2)
//!     .transform_if_present_in_place(|x| x * 3)
//!     .transform_if_present_in_place(|x| x + 1);
//!
//! let text = maybe.transform(|x| x.map(|x| x.to_string().repeat(2)));
//! let result = text.unwrap_to_result();
//!
//! assert!(result.is_ok());
//! assert_eq!(result.get_ok(), "3131");
//! ```

use crate::result::Result;

/// A single-slot container that holds either a value of type `T` or nothing.
///
/// Emptiness is the absence of a payload and nothing else; there is no
/// separate presence flag.
///
/// # Examples
///
/// ```rust
/// use maybe_result::Maybe;
///
/// let present = Maybe::some(3);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.unwrap(), Some(3));
/// assert_eq!(absent.unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(Some(5)).unwrap(), Some(5));
    /// assert_eq!(Maybe::<i32>::wrap(None).unwrap(), None);
    /// ```
    #[inline]
    pub const fn wrap(value: Option<T>) -> Self {
        Self { value }
    }

    /// Wraps a value that is known to be present.
    ///
    /// Presence is guaranteed by the signature, so there is nothing to check
    /// at runtime.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty container.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the payload without consuming the container.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the raw payload, present or not.
    ///
    /// Unlike [`Option::unwrap`] this never panics; absence is returned as
    /// `None` and handling it is left to the caller.
    #[inline]
    pub fn unwrap(self) -> Option<T> {
        self.value
    }

    /// Converts into a [`Result`].
    ///
    /// A present value becomes `Result::ok(value)`; absence becomes
    /// `Result::err_empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let result = Maybe::<i32>::none().unwrap_to_result();
    /// assert!(result.is_err());
    /// assert!(result.is_empty());
    /// ```
    #[inline]
    pub fn unwrap_to_result(self) -> Result<T, ()> {
        self.value.map_or_else(Result::err_empty, Result::ok)
    }

    /// Converts into a [`Result`] by validating the payload.
    ///
    /// `predicate` is always called, with `None` when the container is
    /// empty. When it returns `true` the payload goes into the OK slot,
    /// otherwise the same payload goes into the ERR slot, so a failed
    /// validation hands the original value back to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let rejected = Maybe::wrap(Some(-3)).unwrap_to_result_with_predicate(|x| x.is_some_and(|x| *x > 0));
    /// assert!(rejected.is_err());
    /// assert_eq!(rejected.get_err(), &-3);
    ///
    /// let empty = Maybe::<i32>::wrap(None).unwrap_to_result_with_predicate(|x| x.is_some());
    /// assert!(empty.is_err());
    /// assert_eq!(empty.get_err_or_none(), None);
    /// ```
    #[inline]
    pub fn unwrap_to_result_with_predicate<P>(self, predicate: P) -> Result<T, T>
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        if predicate(self.value.as_ref()) {
            Result::ok_optional(self.value)
        } else {
            Result::err_optional(self.value)
        }
    }

    // =========================================================================
    // Transformation (Consuming)
    // =========================================================================

    /// Applies `function` to the raw payload and wraps whatever it returns.
    ///
    /// The function runs even when the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let result = Maybe::wrap(Some(5))
    ///     .transform(|x| x.map(|x| x * 2))
    ///     .transform(|x| x.map(|x| x + 1));
    /// assert_eq!(result.unwrap(), Some(11));
    ///
    /// let recovered = Maybe::<i32>::none().transform(|x| x.or(Some(0)));
    /// assert_eq!(recovered.unwrap(), Some(0));
    /// ```
    #[inline]
    pub fn transform<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(Option<T>) -> Option<R>,
    {
        Maybe::wrap(function(self.value))
    }

    /// Applies `function` only when a value is present.
    ///
    /// An empty container stays empty and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let length = Maybe::some("hello").transform_if_present(str::len);
    /// assert_eq!(length.unwrap(), Some(5));
    ///
    /// let nothing = Maybe::<&str>::none().transform_if_present(|_| -> usize { unreachable!() });
    /// assert!(nothing.is_empty());
    /// ```
    #[inline]
    pub fn transform_if_present<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        Maybe::wrap(self.value.map(function))
    }

    // =========================================================================
    // Transformation (In Place)
    // =========================================================================

    /// Replaces the payload with `function(payload)` and returns the same
    /// container for chaining.
    ///
    /// The function runs even when the container is empty.
    #[inline]
    pub fn transform_in_place<F>(&mut self, function: F) -> &mut Self
    where
        F: FnOnce(Option<T>) -> Option<T>,
    {
        self.value = function(self.value.take());
        self
    }

    /// Replaces a present payload with `function(payload)`; does nothing
    /// when the container is empty.
    #[inline]
    pub fn transform_if_present_in_place<F>(&mut self, function: F) -> &mut Self
    where
        F: FnOnce(T) -> T,
    {
        self.value = self.value.take().map(function);
        self
    }

    /// Fills an empty container with `default`, which may itself be `None`.
    ///
    /// A present payload is left alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let mut maybe = Maybe::<i32>::none();
    /// maybe.default_if_absent_in_place(Some(7)).default_if_absent_in_place(Some(9));
    /// assert_eq!(maybe.unwrap(), Some(7));
    /// ```
    #[inline]
    pub fn default_if_absent_in_place(&mut self, default: Option<T>) -> &mut Self {
        if self.value.is_none() {
            self.value = default;
        }
        self
    }

    /// Replaces the payload when `predicate` flags it as a failure.
    ///
    /// When `predicate` returns `true`, a new container wrapping
    /// `function(payload)` is returned; otherwise the container is returned
    /// unchanged. Both closures see the raw payload, so they must handle
    /// `None`.
    ///
    /// Despite the name, this does not behave like the other `*_in_place`
    /// operations: it consumes the receiver and hands back a container
    /// rather than mutating through `&mut self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let repaired = Maybe::wrap(Some(-1))
    ///     .if_failure_in_place(|x| x.is_none_or(|x| *x < 0), |_| Some(0));
    /// assert_eq!(repaired.unwrap(), Some(0));
    ///
    /// let untouched = Maybe::wrap(Some(4))
    ///     .if_failure_in_place(|x| x.is_none_or(|x| *x < 0), |_| Some(0));
    /// assert_eq!(untouched.unwrap(), Some(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn if_failure_in_place<P, F>(self, predicate: P, function: F) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
        F: FnOnce(Option<T>) -> Option<T>,
    {
        if predicate(self.value.as_ref()) {
            Self::wrap(function(self.value))
        } else {
            self
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::wrap(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.unwrap()
    }
}

impl<T> From<Maybe<T>> for Result<T, ()> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.unwrap_to_result()
    }
}
