//! propsub - placeholder substitution for configuration text
//!
//! This library expands `${name}` placeholders in strings against property
//! sources such as TOML property files, in-memory tables, or any custom
//! lookup. Placeholder names resolve recursively, resolved values are
//! themselves expanded, and a name may carry an inline default
//! (`${port:8080}`).
//!
//! # Example
//!
//! ```rust
//! use propsub::Properties;
//!
//! let mut props = Properties::new();
//! props.set("user", "alice");
//!
//! let out = propsub::expand("hello ${user}", &props).unwrap();
//! assert_eq!(out, "hello alice");
//! ```

pub mod error;
pub mod expand;
pub mod properties;

pub use error::{ExpandError, Span};
pub use expand::{Expander, PlaceholderResolver, Syntax};
pub use properties::{Properties, PropertiesError};

/// Expand placeholders in `input` against a property table, leaving
/// unresolvable placeholders intact.
///
/// Uses the conventional `${name}` syntax with `:` separating inline
/// defaults. Build an [`Expander`] directly for other delimiters or
/// resolvers.
///
/// # Example
///
/// ```rust
/// use propsub::Properties;
///
/// let props: Properties = [("db.host", "localhost")].into_iter().collect();
///
/// let out = propsub::expand("host=${db.host} port=${db.port:5432}", &props).unwrap();
/// assert_eq!(out, "host=localhost port=5432");
///
/// // Unknown placeholders pass through unchanged.
/// let out = propsub::expand("${unknown}", &props).unwrap();
/// assert_eq!(out, "${unknown}");
/// ```
pub fn expand(input: &str, properties: &Properties) -> Result<String, ExpandError> {
    Expander::default().expand(input, properties)
}

/// Expand placeholders in `input`, failing on any placeholder that cannot be
/// resolved by the table or an inline default.
///
/// # Example
///
/// ```rust
/// use propsub::{ExpandError, Properties};
///
/// let props = Properties::new();
/// let err = propsub::expand_strict("${missing}", &props).unwrap_err();
/// assert!(matches!(err, ExpandError::Unresolved { .. }));
/// ```
pub fn expand_strict(input: &str, properties: &Properties) -> Result<String, ExpandError> {
    Expander::default()
        .with_ignore_unresolvable(false)
        .expand(input, properties)
}
