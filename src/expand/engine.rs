//! Recursive placeholder scanning and substitution

use std::collections::HashSet;

use log::trace;

use crate::error::ExpandError;

use super::syntax::Syntax;

/// Capability for looking up the replacement value of a placeholder.
///
/// Implemented by [`crate::Properties`] and blanket-implemented for any
/// `Fn(&str) -> Option<String>` closure, so ad-hoc resolvers need no wrapper
/// type.
pub trait PlaceholderResolver {
    /// Resolve a placeholder name to its replacement value, or `None` if no
    /// replacement is to be made.
    fn resolve_placeholder(&self, name: &str) -> Option<String>;
}

impl<F> PlaceholderResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_placeholder(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Expands placeholders in strings against a [`PlaceholderResolver`].
///
/// The expander holds only its immutable configuration; every `expand` call
/// owns its own scanning state, so a shared expander may be used from several
/// threads as long as the resolver itself is.
///
/// Unresolvable placeholders are left intact by default; switch to strict
/// failure with [`Expander::with_ignore_unresolvable`].
#[derive(Debug, Clone)]
pub struct Expander {
    syntax: Syntax,
    ignore_unresolvable: bool,
}

impl Default for Expander {
    fn default() -> Self {
        Expander::new(Syntax::default())
    }
}

impl Expander {
    /// Create a lenient expander with the given delimiter syntax
    pub fn new(syntax: Syntax) -> Self {
        Self {
            syntax,
            ignore_unresolvable: true,
        }
    }

    /// Choose whether unresolvable placeholders are left intact (`true`, the
    /// default) or abort expansion with [`ExpandError::Unresolved`] (`false`)
    pub fn with_ignore_unresolvable(mut self, ignore: bool) -> Self {
        self.ignore_unresolvable = ignore;
        self
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Expand every placeholder in `input`.
    ///
    /// Placeholder names are resolved recursively (`${${inner}}` first
    /// resolves `inner`, then looks up the result), and resolved values are
    /// themselves expanded before splicing. A name may carry an inline
    /// default after the configured separator: `${port:8080}` falls back to
    /// `8080` when `port` has no value.
    ///
    /// A placeholder without a matching suffix ends the scan; the remaining
    /// text is returned untouched. Callers relying on literal prefix text in
    /// their strings depend on this.
    ///
    /// # Errors
    ///
    /// [`ExpandError::CircularReference`] when a placeholder re-enters its
    /// own resolution chain, and [`ExpandError::Unresolved`] when a
    /// placeholder has no value and the expander is strict.
    pub fn expand<R>(&self, input: &str, resolver: &R) -> Result<String, ExpandError>
    where
        R: PlaceholderResolver + ?Sized,
    {
        let mut visited = HashSet::new();
        self.expand_value(input, resolver, &mut visited)
    }

    /// One level of scanning. Re-entered for placeholder bodies and for
    /// resolved values; `visited` is shared across the whole call tree of a
    /// single top-level `expand`.
    fn expand_value<R>(
        &self,
        input: &str,
        resolver: &R,
        visited: &mut HashSet<String>,
    ) -> Result<String, ExpandError>
    where
        R: PlaceholderResolver + ?Sized,
    {
        let prefix = self.syntax.prefix();
        let suffix = self.syntax.suffix();

        let mut buf = String::from(input);
        let mut next = buf.find(prefix);

        while let Some(start) = next {
            let Some(end) = self.find_end_index(&buf, start) else {
                // No matching suffix: nothing after this point can be
                // scanned reliably, pass the rest through.
                break;
            };

            let raw = buf[start + prefix.len()..end].to_string();
            if !visited.insert(raw.clone()) {
                return Err(ExpandError::CircularReference {
                    name: raw,
                    input: buf,
                    span: start..end + suffix.len(),
                });
            }

            // The body may contain placeholders of its own.
            let name = self.expand_value(&raw, resolver, visited)?;

            let mut value = resolver.resolve_placeholder(&name);
            if value.is_none() {
                if let Some(separator) = self.syntax.value_separator() {
                    // Split on the first separator only, so defaults may
                    // contain the separator themselves.
                    if let Some(at) = name.find(separator) {
                        let actual = &name[..at];
                        let default = &name[at + separator.len()..];
                        value = resolver
                            .resolve_placeholder(actual)
                            .or_else(|| Some(default.to_string()));
                    }
                }
            }

            match value {
                Some(value) => {
                    // Resolved values may contain placeholders too.
                    let value = self.expand_value(&value, resolver, visited)?;
                    buf.replace_range(start..end + suffix.len(), &value);
                    trace!("resolved placeholder '{name}'");
                    // Continue just past the spliced value: substituted text
                    // is never rescanned.
                    next = find_from(&buf, prefix, start + value.len());
                }
                None if self.ignore_unresolvable => {
                    next = find_from(&buf, prefix, end + suffix.len());
                }
                None => {
                    return Err(ExpandError::Unresolved {
                        name,
                        span: start..end + suffix.len(),
                        input: buf,
                    });
                }
            }

            visited.remove(&raw);
        }

        Ok(buf)
    }

    /// Find the byte index of the suffix matching the prefix at `start`,
    /// counting nested open markers so that inner placeholders do not
    /// terminate the outer one. Comparison is byte-wise; a match of valid
    /// UTF-8 in valid UTF-8 always lies on character boundaries.
    fn find_end_index(&self, buf: &str, start: usize) -> Option<usize> {
        let bytes = buf.as_bytes();
        let suffix = self.syntax.suffix().as_bytes();
        let simple_open = self.syntax.simple_open().as_bytes();

        let mut index = start + self.syntax.prefix().len();
        let mut depth = 0usize;
        while index < bytes.len() {
            if bytes[index..].starts_with(suffix) {
                if depth > 0 {
                    depth -= 1;
                    index += suffix.len();
                } else {
                    return Some(index);
                }
            } else if bytes[index..].starts_with(simple_open) {
                depth += 1;
                index += simple_open.len();
            } else {
                index += 1;
            }
        }
        None
    }
}

fn find_from(buf: &str, needle: &str, from: usize) -> Option<usize> {
    buf.get(from..)
        .and_then(|tail| tail.find(needle))
        .map(|at| at + from)
}
