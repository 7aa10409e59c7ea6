//! Non-fatal diagnostics for query compilation.
//!
//! Nothing in this crate aborts a request: malformed input degrades to an
//! empty or partial predicate, and every degradation is recorded as a
//! [`Diagnostic`] returned alongside the compiled result. Callers decide
//! whether to surface, log, or ignore them.

use thiserror::Error;

/// A non-fatal degradation recorded while compiling a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Input text was not valid JSON; the affected group compiled to nothing.
    #[error("invalid JSON in {context}: {message}")]
    ParseError {
        /// Which input the JSON came from.
        context: &'static str,
        /// The decoder's error message.
        message: String,
    },

    /// A value did not match the shape its operator expects; no parameter was
    /// bound for it.
    #[error("value for {field} does not fit operator {operator}")]
    TypeMismatch {
        /// The filter's field reference.
        field: String,
        /// The canonical operator token.
        operator: String,
    },

    /// An operator received a list of the wrong length; its placeholders were
    /// emitted without matching parameters.
    #[error("{operator} on {field} expects {expected} values, got {got}")]
    ArityMismatch {
        /// The filter's field reference.
        field: String,
        /// The canonical operator token.
        operator: String,
        /// The list length the operator requires.
        expected: usize,
        /// The list length that arrived.
        got: usize,
    },

    /// An expression element could not be used in the detected mode and was
    /// skipped.
    #[error("ignored unusable element at position {position}")]
    IgnoredElement {
        /// Zero-based position of the skipped element.
        position: usize,
    },
}
