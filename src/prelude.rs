//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`status!`]
//! - **Types**: [`Outcome`], [`Status`]
//! - **Traits**: [`Pipe`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     outcome!(raw.parse::<u16>()).map_err(|e| e.to_string())
//! }
//!
//! let port = parse_port("8080").also(|o| assert!(o.is_ok()));
//! assert_eq!(port.into_ok(), Some(8080));
//! ```

// Macros
pub use crate::{outcome, status};

// Core types
pub use crate::outcome::Outcome;
pub use crate::status::Status;

// Traits
pub use crate::pipe::Pipe;
