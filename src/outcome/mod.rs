//! The general-case outcome type and its accessors.
//!
//! This module provides [`Outcome`], a two-variant value representing either
//! a success payload or an error payload. It favors carrying failure as data:
//! the error side travels through [`Outcome::map`] / [`Outcome::map_err`]
//! untouched, and callers pick the accessor strictness they need.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type holding exactly one of a success or an error value
//! - Iterator adapters over the success payload
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<i32, &str> = Outcome::ok(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.into_ok(), Some(42));
//!
//! let failed: Outcome<i32, &str> = Outcome::err("not a number");
//! assert_eq!(failed.try_err(), Some(&"not a number"));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
