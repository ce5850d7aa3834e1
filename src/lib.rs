//! # maybe-result
//!
//! Two small wrapper types that make absence and failure explicit in an API:
//!
//! - **[`Maybe`]**: a single-slot container holding a value or nothing, with
//!   chainable transformations (consuming and in-place).
//! - **[`Result`]**: an outcome tagged OK or ERR at construction, each side
//!   carrying an independently typed payload that may itself be absent.
//!
//! Accessing a payload against the wrong variant, or reaching for a direct
//! accessor when the payload is empty, is a programmer error. Such misuse
//! panics with an [`InvalidStateError`] message; the `try_*` accessors hand
//! the same error back instead.
//!
//! ## Feature Flags
//!
//! - `result`: the [`Result`] outcome type and [`InvalidStateError`]
//! - `maybe`: the [`Maybe`] container (implies `result`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_result::prelude::*;
//!
//! let doubled = Maybe::wrap(Some(5))
//!     .transform_if_present(|x| x * 2)
//!     .transform_if_present(|x| x + 1)
//!     .unwrap_to_result();
//!
//! assert!(doubled.is_ok());
//! assert_eq!(doubled.get_ok(), &11);
//!
//! let missing = Maybe::<i32>::none().unwrap_to_result();
//! assert!(missing.is_err());
//! assert!(missing.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types and the contract-violation error.
///
/// # Usage
///
/// ```rust
/// use maybe_result::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "result")]
    pub use crate::error::InvalidStateError;

    #[cfg(feature = "result")]
    pub use crate::result::{Result, ResultType};

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;
}

#[cfg(feature = "result")]
pub mod error;

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "result")]
pub use error::InvalidStateError;

#[cfg(feature = "result")]
pub use result::{Result, ResultType};

#[cfg(feature = "maybe")]
pub use maybe::Maybe;
