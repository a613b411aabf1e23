//! Delimiter configuration for placeholder scanning

/// Closing brackets whose single opening character doubles as the nesting
/// marker when the prefix ends with it.
const WELL_KNOWN_PAIRS: [(&str, &str); 3] = [("}", "{"), ("]", "["), (")", "(")];

/// Placeholder delimiter configuration, immutable once built.
///
/// Besides the prefix and suffix this carries the *simple open marker*: the
/// substring whose appearance inside a placeholder body bumps the nesting
/// depth during end-delimiter scanning. For `${`/`}` the marker is the bare
/// `{`, so `${a{b}c}` terminates at the outer brace rather than the first one.
/// For delimiter pairs without a well-known bracket relationship the marker
/// is the full prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    prefix: String,
    suffix: String,
    simple_open: String,
    value_separator: Option<String>,
}

impl Syntax {
    /// Build a syntax from a prefix and suffix, with no default-value
    /// separator.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` or `suffix` is empty.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let suffix = suffix.into();
        assert!(!prefix.is_empty(), "placeholder prefix must not be empty");
        assert!(!suffix.is_empty(), "placeholder suffix must not be empty");

        let simple_open = WELL_KNOWN_PAIRS
            .iter()
            .find(|(close, open)| *close == suffix && prefix.ends_with(open))
            .map(|(_, open)| (*open).to_string())
            .unwrap_or_else(|| prefix.clone());

        Self {
            prefix,
            suffix,
            simple_open,
            value_separator: None,
        }
    }

    /// Set the separator between a placeholder name and its inline default
    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.value_separator = Some(separator.into());
        self
    }

    /// Disable the default-value syntax
    pub fn without_value_separator(mut self) -> Self {
        self.value_separator = None;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Nesting marker used while scanning for the matching suffix
    pub fn simple_open(&self) -> &str {
        &self.simple_open
    }

    pub fn value_separator(&self) -> Option<&str> {
        self.value_separator.as_deref()
    }
}

impl Default for Syntax {
    /// The conventional `${name}` syntax with `:` separating inline defaults
    fn default() -> Self {
        Syntax::new("${", "}").with_value_separator(":")
    }
}
