//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Carrying Failure as Data
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_age(raw: &str) -> Outcome<u8, String> {
//!     Outcome::from_result(raw.parse::<u8>()).map_err(|e| e.to_string())
//! }
//!
//! let age = parse_age("30");
//! assert!(age.is_ok());
//! assert_eq!(age.try_ok(), Some(&30));
//!
//! let bad = parse_age("thirty");
//! assert!(bad.is_err());
//! assert!(bad.try_ok().is_none());
//! ```
//!
//! ## No-Payload Success
//!
//! ```
//! use outcome_rail::Status;
//!
//! fn validate(name: &str) -> Status<&'static str> {
//!     if name.is_empty() {
//!         Status::err("empty name")
//!     } else {
//!         Status::ok()
//!     }
//! }
//!
//! assert!(validate("ada").try_ok());
//! assert_eq!(validate("").try_err(), Some(&"empty name"));
//! ```
//!
//! ## Inline Combinators
//!
//! ```
//! use outcome_rail::{Outcome, Pipe};
//!
//! let outcome = "21"
//!     .pipe(|s| s.parse::<i32>().unwrap())
//!     .pipe(|n| n * 2)
//!     .also(|n| assert_eq!(*n, 42))
//!     .pipe(Outcome::<i32, String>::ok);
//!
//! assert_eq!(outcome.into_ok(), Some(42));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Status, and core Result
pub mod convert;
/// Macros for lifting Result values into the crate's types
pub mod macros;
/// The general-case Outcome type and its accessors
pub mod outcome;
/// Inline value-transformation combinators
pub mod pipe;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The no-payload Status specialization
pub mod status;

// Re-export the full surface at root; the crate is small enough that
// consumers rarely need to reach into submodules.
pub use outcome::{IntoIter, Iter, IterMut, Outcome};
pub use pipe::Pipe;
pub use status::Status;
