//! Ergonomic macros for lifting `Result` values into the crate's types.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression into an
//!   [`Outcome`](crate::Outcome).
//! - [`macro@crate::status`] - Wraps a `Result<(), E>`-producing expression
//!   into a [`Status`](crate::Status).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{outcome, status};
//!
//! let o = outcome!("42".parse::<i32>());
//! assert!(o.is_ok());
//!
//! let s = status!(Err::<(), &str>("failed"));
//! assert!(s.is_err());
//! ```

/// Wraps a `Result`-producing expression or block into an
/// [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome;
///
/// let parsed = outcome!("21".parse::<i32>()).map(|n| n * 2);
/// assert_eq!(parsed.into_ok(), Some(42));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

/// Wraps a `Result<(), E>`-producing expression or block into a
/// [`Status`](crate::Status).
///
/// # Examples
///
/// ```
/// use outcome_rail::status;
///
/// fn ensure_positive(n: i32) -> Result<(), &'static str> {
///     if n > 0 { Ok(()) } else { Err("not positive") }
/// }
///
/// assert!(status!(ensure_positive(1)).try_ok());
/// assert!(status!(ensure_positive(-1)).is_err());
/// ```
#[macro_export]
macro_rules! status {
    ($expr:expr $(,)?) => {
        $crate::Status::from_result($expr)
    };
}
