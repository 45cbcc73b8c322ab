//! Conversion helpers between [`Outcome`], [`Status`], and core `Result`.
//!
//! These adapters make it straightforward to adopt the crate incrementally:
//! wrap a `Result` coming out of an external API, or flatten an outcome back
//! into `Result` so `?` keeps working at the boundary.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Status};
//!
//! let outcome: Outcome<i32, &str> = Ok::<_, &str>(42).into();
//! assert!(outcome.is_ok());
//!
//! let status = Status::from_result(Err::<(), &str>("boom"));
//! assert!(status.is_err());
//! ```

use crate::outcome::core::Outcome;
use crate::status::Status;

impl<T, E> Outcome<T, E> {
    /// Converts into a core `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.to_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Wraps a core `Result` into an `Outcome`.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::from_result(Err::<i32, &str>("boom"));
    /// assert!(o.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E> Status<E> {
    /// Converts into a core `Result<(), E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert_eq!(Status::<&str>::ok().to_result(), Ok(()));
    /// assert_eq!(Status::<&str>::err("boom").to_result(), Err("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<(), E> {
        match self {
            Self::Ok => Ok(()),
            Self::Err(error) => Err(error),
        }
    }

    /// Wraps a core `Result<(), E>` into a `Status`.
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_result()
    }
}

impl<E> From<Result<(), E>> for Status<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Self::from_result(result)
    }
}

impl<E> From<Status<E>> for Result<(), E> {
    #[inline]
    fn from(status: Status<E>) -> Self {
        status.to_result()
    }
}

/// The no-payload specialization is interchangeable with the general case
/// instantiated at `()`.
impl<E> From<Outcome<(), E>> for Status<E> {
    #[inline]
    fn from(outcome: Outcome<(), E>) -> Self {
        match outcome {
            Outcome::Ok(()) => Self::Ok,
            Outcome::Err(error) => Self::Err(error),
        }
    }
}

impl<E> From<Status<E>> for Outcome<(), E> {
    #[inline]
    fn from(status: Status<E>) -> Self {
        match status {
            Status::Ok => Self::Ok(()),
            Status::Err(error) => Self::Err(error),
        }
    }
}
