//! Inline value-transformation combinators.
//!
//! This module provides [`Pipe`], a blanket extension trait that lets any
//! value be threaded through a closure without a temporary binding:
//! [`pipe`](Pipe::pipe) forwards the value into a transform and returns the
//! transform's result; [`also`](Pipe::also) lets a closure observe the value
//! for its side effect and hands the value back unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Pipe;
//!
//! let shouted = "hello".pipe(str::to_uppercase);
//! assert_eq!(shouted, "HELLO");
//!
//! let mut seen = Vec::new();
//! let n = 42.also(|v| seen.push(*v));
//! assert_eq!(n, 42);
//! assert_eq!(seen, [42]);
//! ```

/// Extension trait for applying closures to values inline.
///
/// Blanket-implemented for every sized type, so both combinators are always
/// in reach once the trait is imported. Both consume the receiver, making
/// them natural at the end of a builder or computation chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Pipe};
///
/// let outcome = 21
///     .pipe(|n| n * 2)
///     .also(|n| assert_eq!(*n, 42))
///     .pipe(Outcome::<i32, &str>::ok);
/// assert!(outcome.is_ok());
/// ```
pub trait Pipe: Sized {
    /// Applies `f` to the value and returns `f`'s result.
    ///
    /// Invokes `f` exactly once. Equivalent to `f(self)`, written postfix.
    ///
    /// # Arguments
    ///
    /// * `f` - The transform to apply
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Pipe;
    ///
    /// let len = "outcome".pipe(str::len);
    /// assert_eq!(len, 7);
    /// ```
    #[inline]
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }

    /// Applies `f` to the value for its side effect and returns the value
    /// unchanged.
    ///
    /// Invokes `f` exactly once with a shared borrow of the value. Useful
    /// for logging or asserting mid-chain without breaking the flow.
    ///
    /// # Arguments
    ///
    /// * `f` - The observer to run
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Pipe;
    ///
    /// let v = vec![1, 2, 3].also(|v| assert_eq!(v.len(), 3));
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[must_use]
    #[inline]
    fn also<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }
}

impl<T> Pipe for T {}
