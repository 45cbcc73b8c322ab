#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const BAD_UNWRAP_OK: &str = "try to extract the result of err with ok";
pub(crate) const BAD_UNWRAP_ERR: &str = "try to extract the result of ok with err";

/// Two-track value that is exactly one of a success payload or an error payload.
///
/// `Outcome<T, E>` represents a finished fallible computation: it either
/// succeeded with a value of type `T` or failed with an error of type `E`,
/// never both and never neither. Errors travel as ordinary data through
/// [`map`](Outcome::map) / [`map_err`](Outcome::map_err) instead of
/// unwinding, and the accessor surface offers three levels of strictness:
///
/// * panicking: [`unwrap_ok`](Outcome::unwrap_ok) / [`unwrap_err`](Outcome::unwrap_err)
/// * optional: [`try_ok`](Outcome::try_ok) / [`try_err`](Outcome::try_err)
/// * unchecked: [`unwrap_ok_unchecked`](Outcome::unwrap_ok_unchecked) /
///   [`unwrap_err_unchecked`](Outcome::unwrap_err_unchecked)
///
/// There is no empty or partially-initialized state: every `Outcome` is
/// constructed directly into one of its two variants and keeps that
/// discriminant until it is reassigned wholesale or dropped. The type
/// deliberately has no `Default` impl.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::ok(n / 2)
///     } else {
///         Outcome::err(format!("{n} is odd"))
///     }
/// }
///
/// assert_eq!(halve(10).try_ok(), Some(&5));
/// assert!(halve(3).is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert!(o.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an error outcome.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert!(o.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the outcome holds a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert!(o.is_ok());
    /// assert!(!o.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome holds an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert!(o.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns a reference to the success value, asserting the discriminant.
    ///
    /// This is the strict accessor: reaching for the success value of an
    /// error outcome is programmer error, not domain failure, and is
    /// surfaced as a panic rather than a default or garbage value.
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of err with ok"` if the
    /// outcome is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(*o.unwrap_ok(), 42);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_ok(&self) -> &T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{}", BAD_UNWRAP_OK),
        }
    }

    /// Mutable form of [`unwrap_ok`](Outcome::unwrap_ok).
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of err with ok"` if the
    /// outcome is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut o = Outcome::<i32, &str>::ok(41);
    /// *o.unwrap_ok_mut() += 1;
    /// assert_eq!(*o.unwrap_ok(), 42);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_ok_mut(&mut self) -> &mut T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{}", BAD_UNWRAP_OK),
        }
    }

    /// Returns a reference to the error, asserting the discriminant.
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of ok with err"` if the
    /// outcome is `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert_eq!(*o.unwrap_err(), "boom");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_err(&self) -> &E {
        match self {
            Self::Ok(_) => panic!("{}", BAD_UNWRAP_ERR),
            Self::Err(error) => error,
        }
    }

    /// Mutable form of [`unwrap_err`](Outcome::unwrap_err).
    ///
    /// # Panics
    ///
    /// Panics with `"try to extract the result of ok with err"` if the
    /// outcome is `Ok`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_err_mut(&mut self) -> &mut E {
        match self {
            Self::Ok(_) => panic!("{}", BAD_UNWRAP_ERR),
            Self::Err(error) => error,
        }
    }

    /// Returns a reference to the success value without checking the
    /// discriminant.
    ///
    /// Performance escape hatch for callers that have already proven the
    /// discriminant through control flow and want to skip the redundant
    /// branch. Debug builds still assert.
    ///
    /// # Safety
    ///
    /// The outcome must be `Ok`. Calling this on an `Err` outcome is
    /// undefined behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// if o.is_ok() {
    ///     // SAFETY: discriminant checked just above.
    ///     assert_eq!(unsafe { *o.unwrap_ok_unchecked() }, 42);
    /// }
    /// ```
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_ok_unchecked(&self) -> &T {
        debug_assert!(self.is_ok());
        match self {
            Self::Ok(value) => value,
            // SAFETY: the caller guarantees the outcome is `Ok`.
            Self::Err(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Mutable form of [`unwrap_ok_unchecked`](Outcome::unwrap_ok_unchecked).
    ///
    /// # Safety
    ///
    /// The outcome must be `Ok`. Calling this on an `Err` outcome is
    /// undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_ok_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_ok());
        match self {
            Self::Ok(value) => value,
            // SAFETY: the caller guarantees the outcome is `Ok`.
            Self::Err(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns a reference to the error without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The outcome must be `Err`. Calling this on an `Ok` outcome is
    /// undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_err_unchecked(&self) -> &E {
        debug_assert!(self.is_err());
        match self {
            // SAFETY: the caller guarantees the outcome is `Err`.
            Self::Ok(_) => unsafe { core::hint::unreachable_unchecked() },
            Self::Err(error) => error,
        }
    }

    /// Mutable form of [`unwrap_err_unchecked`](Outcome::unwrap_err_unchecked).
    ///
    /// # Safety
    ///
    /// The outcome must be `Err`. Calling this on an `Ok` outcome is
    /// undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn unwrap_err_unchecked_mut(&mut self) -> &mut E {
        debug_assert!(self.is_err());
        match self {
            // SAFETY: the caller guarantees the outcome is `Err`.
            Self::Ok(_) => unsafe { core::hint::unreachable_unchecked() },
            Self::Err(error) => error,
        }
    }

    /// Returns a reference to the success value if present.
    ///
    /// The lenient accessor: never panics, leaves recovery to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.try_ok(), Some(&42));
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert_eq!(o.try_ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn try_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Mutable form of [`try_ok`](Outcome::try_ok).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut o = Outcome::<i32, &str>::ok(41);
    /// if let Some(value) = o.try_ok_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(o.try_ok(), Some(&42));
    /// ```
    #[must_use]
    #[inline]
    pub fn try_ok_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the error if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert_eq!(o.try_err(), Some(&"boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn try_err(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Mutable form of [`try_err`](Outcome::try_err).
    #[must_use]
    #[inline]
    pub fn try_err_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is `Err`, the error passes through unchanged and `f`
    /// is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(21);
    /// let doubled = o.map(|x| x * 2);
    /// assert_eq!(doubled.into_ok(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error while preserving the success branch.
    ///
    /// If the outcome is `Ok`, the success value passes through unchanged
    /// and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// let mapped = o.map_err(|e| format!("failed: {e}"));
    /// assert_eq!(mapped.try_err().map(String::as_str), Some("failed: boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.into_ok(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert_eq!(o.into_err(), Some("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<String, &str>::ok("hi".to_string());
    /// let len = o.as_ref().map(|s| s.len());
    /// assert_eq!(len.into_ok(), Some(2));
    /// assert!(o.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[must_use]
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}
