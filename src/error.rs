//! Error types for placeholder expansion

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in the string being expanded
pub type Span = std::ops::Range<usize>;

/// Fatal expansion failures.
///
/// Both variants abort the whole `expand` call; no partially substituted
/// string is returned. A placeholder with a missing terminator is not an
/// error - the scan stops and the remaining text is passed through as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A placeholder re-entered its own resolution chain
    #[error("circular placeholder reference: '{name}'")]
    CircularReference {
        /// Raw placeholder body that was seen twice
        name: String,
        /// String being rewritten when the cycle was caught
        input: String,
        /// Location of the re-entrant placeholder within `input`
        span: Span,
    },

    /// No property source could supply a value and strict mode is on
    #[error("could not resolve placeholder '{name}' in \"{input}\"")]
    Unresolved {
        /// Fully resolved placeholder name that failed lookup
        name: String,
        /// String being rewritten when the lookup failed
        input: String,
        /// Location of the whole placeholder within `input`
        span: Span,
    },
}

impl ExpandError {
    /// Format the error as a labelled report using ariadne
    ///
    /// The report is rendered against the input carried by the error, so the
    /// label always lands on the offending placeholder. `filename` is only
    /// used for display.
    pub fn report(&self, filename: &str) -> String {
        let (message, label, input, span) = match self {
            ExpandError::CircularReference { name, input, span } => (
                format!("circular placeholder reference: '{}'", name),
                "this placeholder re-enters its own resolution chain",
                input,
                span,
            ),
            ExpandError::Unresolved { name, input, span } => (
                format!("could not resolve placeholder '{}'", name),
                "no property source supplies this placeholder",
                input,
                span,
            ),
        };

        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(input.as_str())), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Placeholder name the error is about
    pub fn placeholder(&self) -> &str {
        match self {
            ExpandError::CircularReference { name, .. } => name,
            ExpandError::Unresolved { name, .. } => name,
        }
    }
}
