//! Non-fatal warnings raised while resolving columns and parsing finds.
//!
//! The column resolver and the record filter never log directly. They hand
//! every warning to a [`DiagnosticSink`] supplied by the caller.

use std::fmt;

/// A recoverable problem with user input. The offending fragment is
/// dropped and processing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A hide-list entry that names no field.
    UnknownColumn(String),
    /// A field in the universe without a source key.
    UnmappedField(String),
    /// A find segment without `=`.
    MissingEquals(String),
    /// A find key that resolves to no source key.
    UnknownFindKey(String),
    /// A quote opened in the find expression and never closed.
    UnterminatedQuote(String),
    /// A glob whose brackets were taken literally.
    InvalidGlob { pattern: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn(name) => {
                write!(f, "Column '{}' not recognized. Ignoring.", name)
            }
            Self::UnmappedField(name) => write!(
                f,
                "No JSON key mapping found for display header '{}'. Skipping column.",
                name
            ),
            Self::MissingEquals(segment) => write!(
                f,
                "Invalid find condition '{}'. Expected format 'key=pattern'. Skipping.",
                segment
            ),
            Self::UnknownFindKey(key) => {
                write!(f, "Find filter key '{}' not recognized. Skipping.", key)
            }
            Self::UnterminatedQuote(segment) => write!(
                f,
                "Unterminated quote in find condition '{}'. Skipping.",
                segment
            ),
            Self::InvalidGlob { pattern, reason } => write!(
                f,
                "Invalid glob '{}' ({}). Matching brackets literally.",
                pattern, reason
            ),
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    /// Records one warning.
    fn warn(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&mut self, _diagnostic: Diagnostic) {}
}
