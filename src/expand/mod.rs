//! Placeholder expansion engine
//!
//! This module provides the scanning and substitution machinery that turns
//! strings with `${name}` placeholders into their expanded form. Placeholder
//! names may themselves contain placeholders, resolved values may contain
//! further placeholders, and a name may carry an inline default separated by
//! the configured separator.
//!
//! # Example
//!
//! ```rust
//! use propsub::expand::Expander;
//!
//! let expander = Expander::default();
//! let lookup = |name: &str| match name {
//!     "user" => Some("alice".to_string()),
//!     _ => None,
//! };
//!
//! let out = expander.expand("home of ${user:nobody}", &lookup).unwrap();
//! assert_eq!(out, "home of alice");
//! ```

mod engine;
mod syntax;

pub use engine::{Expander, PlaceholderResolver};
pub use syntax::Syntax;
