//! The no-payload specialization for operations that succeed silently.
//!
//! [`Status`] covers the common case where success carries nothing and only
//! failure has a payload. Compared to [`Outcome<(), E>`](crate::Outcome) it
//! trims the surface: `try_ok` collapses to a `bool` and `map` takes a
//! zero-argument closure. The two forms convert freely through
//! [`From`](crate::convert).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Status;
//!
//! fn check_name(name: &str) -> Status<String> {
//!     if name.is_empty() {
//!         Status::err("name must not be empty".to_string())
//!     } else {
//!         Status::ok()
//!     }
//! }
//!
//! assert!(check_name("ada").try_ok());
//! assert!(check_name("").is_err());
//! ```

use crate::outcome::core::{Outcome, BAD_UNWRAP_ERR, BAD_UNWRAP_OK};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of an operation that produces no success payload.
///
/// `Status<E>` is either `Ok`, carrying nothing, or `Err(E)`. Success needs
/// no storage, so default construction goes straight to a valid `Ok` state
/// and the type implements [`Default`].
///
/// # Serde Support
///
/// `Status` implements `Serialize` and `Deserialize` when `E` does
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Status;
///
/// let s = Status::<&str>::ok();
/// assert!(s.is_ok());
///
/// let s = Status::<&str>::err("boom");
/// assert_eq!(s.try_err(), Some(&"boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Status<E> {
    Ok,
    Err(E),
}

/// Success carries no payload, so default construction goes straight to a
/// valid `Ok` state. Hand-written to avoid an `E: Default` bound.
impl<E> Default for Status<E> {
    #[inline]
    fn default() -> Self {
        Self::Ok
    }
}

impl<E> Status<E> {
    /// Creates a success status. Takes no value; success has no payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let s = Status::<&str>::ok();
    /// assert!(s.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn ok() -> Self {
        Self::Ok
    }

    /// Creates an error status.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let s = Status::<&str>::err("boom");
    /// assert!(s.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the status is `Ok`.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` if the status holds an error.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Asserts that the status is `Ok`. Returns nothing; there is no payload.
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of err with ok"` if the
    /// status is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// Status::<&str>::ok().unwrap_ok();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_ok(&self) {
        if self.is_err() {
            panic!("{}", BAD_UNWRAP_OK);
        }
    }

    /// Returns a reference to the error, asserting the discriminant.
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of ok with err"` if the
    /// status is `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let s = Status::<&str>::err("boom");
    /// assert_eq!(*s.unwrap_err(), "boom");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_err(&self) -> &E {
        match self {
            Self::Ok => panic!("{}", BAD_UNWRAP_ERR),
            Self::Err(error) => error,
        }
    }

    /// Mutable form of [`unwrap_err`](Status::unwrap_err).
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of ok with err"` if the
    /// status is `Ok`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_err_mut(&mut self) -> &mut E {
        match self {
            Self::Ok => panic!("{}", BAD_UNWRAP_ERR),
            Self::Err(error) => error,
        }
    }

    /// No-op accessor kept for symmetry with
    /// [`Outcome::unwrap_ok_unchecked`](crate::Outcome::unwrap_ok_unchecked).
    ///
    /// # Safety
    ///
    /// The status must be `Ok`. There is no payload to read, so misuse
    /// cannot corrupt memory, but callers must uphold the same contract as
    /// the general case.
    #[inline]
    pub unsafe fn unwrap_ok_unchecked(&self) {
        debug_assert!(self.is_ok());
    }

    /// Returns a reference to the error without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The status must be `Err`. Calling this on an `Ok` status is undefined
    /// behavior.
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_err_unchecked(&self) -> &E {
        debug_assert!(self.is_err());
        match self {
            // SAFETY: the caller guarantees the status is `Err`.
            Self::Ok => unsafe { core::hint::unreachable_unchecked() },
            Self::Err(error) => error,
        }
    }

    /// Mutable form of [`unwrap_err_unchecked`](Status::unwrap_err_unchecked).
    ///
    /// # Safety
    ///
    /// The status must be `Err`. Calling this on an `Ok` status is undefined
    /// behavior.
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_err_unchecked_mut(&mut self) -> &mut E {
        debug_assert!(self.is_err());
        match self {
            // SAFETY: the caller guarantees the status is `Err`.
            Self::Ok => unsafe { core::hint::unreachable_unchecked() },
            Self::Err(error) => error,
        }
    }

    /// Boolean collapse of the optional accessor: there is no success
    /// payload to hand back, so presence is all there is to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert!(Status::<&str>::ok().try_ok());
    /// assert!(!Status::<&str>::err("boom").try_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn try_ok(&self) -> bool {
        self.is_ok()
    }

    /// Returns a reference to the error if present. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let s = Status::<&str>::err("boom");
    /// assert_eq!(s.try_err(), Some(&"boom"));
    /// assert_eq!(Status::<&str>::ok().try_err(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn try_err(&self) -> Option<&E> {
        match self {
            Self::Ok => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Mutable form of [`try_err`](Status::try_err).
    #[must_use]
    #[inline]
    pub fn try_err_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Ok => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Produces a success value if the status is `Ok`, lifting the result
    /// into the general-case [`Outcome`].
    ///
    /// If the status is `Err`, the error passes through unchanged and `f`
    /// is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A zero-argument function producing the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let o = Status::<&str>::ok().map(|| 42);
    /// assert_eq!(o.into_ok(), Some(42));
    ///
    /// let o = Status::<&str>::err("boom").map(|| 42);
    /// assert!(o.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> U,
    {
        match self {
            Self::Ok => Outcome::Ok(f()),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error while preserving the success branch.
    ///
    /// If the status is `Ok`, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let s = Status::<&str>::err("boom").map_err(|e| format!("failed: {e}"));
    /// assert_eq!(s.try_err().map(String::as_str), Some("failed: boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Status<G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok => Status::Ok,
            Self::Err(error) => Status::Err(f(error)),
        }
    }

    /// Extracts the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert_eq!(Status::<&str>::err("boom").into_err(), Some("boom"));
    /// assert_eq!(Status::<&str>::ok().into_err(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Ok => None,
            Self::Err(error) => Some(error),
        }
    }
}
