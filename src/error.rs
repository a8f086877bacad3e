//! Error types for the Ratlisp interpreter

use thiserror::Error;

/// Ratlisp interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// General parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Opening and closing parentheses do not match
    ///
    /// **Triggered by:** an unclosed `(` or a stray `)`
    /// **Example:** `(+ 1 2` or `(+ 1 2))`
    #[error("Unbalanced parentheses: {message}")]
    UnbalancedParens {
        /// Error description
        message: String,
    },

    /// More than one top-level expression in a single input
    ///
    /// **Example:** `(+ 1 2) (+ 3 4)`, which must be entered one at a time
    #[error("Multiple top-level forms: enter one expression at a time")]
    MultipleTopLevelForms,

    /// Input contained no expression at all
    #[error("Empty input: nothing to evaluate")]
    EmptyInput,

    // Evaluation errors
    /// Leading symbol is neither a special form, a builtin, nor a binding
    ///
    /// **Example:** `(foo 1 2)` when `foo` was never defined
    #[error("The object '{name}' is not applicable")]
    NotApplicable {
        /// The unrecognized operator symbol
        name: String,
    },

    /// Special form called with the wrong shape
    ///
    /// **Example:** `(define (x) 5)`, where the name must be a bare symbol
    #[error("Invalid syntax for '{form}': {message}")]
    InvalidSyntax {
        /// The offending special form
        form: String,
        /// What was wrong with the shape
        message: String,
    },

    /// Wrong argument count for a form or function
    #[error("'{name}' expects {expected} argument(s), got {got}")]
    ArityError {
        /// Operator name
        name: String,
        /// Expected count, rendered (e.g. "2" or "at least 2")
        expected: String,
        /// Actual count
        got: usize,
    },

    /// An arithmetic function received something that is not a rational leaf
    ///
    /// **Example:** `(+ 1 (quote (2 3)))`
    #[error("Not a number: '{text}'")]
    NotANumber {
        /// The offending rendered argument
        text: String,
    },

    /// Division by zero, or a rational built with a zero denominator
    #[error("Division by zero")]
    DivisionByZero,

    /// An exact result whose numerator or denominator does not fit in `i64`
    ///
    /// **Triggered by:** `(+ 9223372036854775807 1)` or
    /// `(- -9223372036854775808)`
    #[error("Numeric overflow: result does not fit in a 64-bit rational")]
    NumericOverflow,

    /// `car` or `cdr` applied to a leaf
    #[error("'{op}' does not work on atoms")]
    NotApplicableToAtom {
        /// `car` or `cdr`
        op: String,
    },

    /// Evaluation exceeded the configured depth limit
    ///
    /// **Triggered by:** self-referential bindings, e.g.
    /// `(define x x)` followed by `x`
    #[error("Recursion limit exceeded (max depth: {limit})")]
    RecursionLimit {
        /// Configured maximum depth
        limit: usize,
    },
}

impl Error {
    /// Create a parse error with a message
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::ParseError(msg.into())
    }

    /// Create an arity error for `name` expecting exactly `expected` arguments
    pub fn arity(name: &str, expected: usize, got: usize) -> Self {
        Error::ArityError {
            name: name.to_string(),
            expected: expected.to_string(),
            got,
        }
    }

    /// Create an arity error for `name` expecting at least `expected` arguments
    pub fn arity_at_least(name: &str, expected: usize, got: usize) -> Self {
        Error::ArityError {
            name: name.to_string(),
            expected: format!("at least {}", expected),
            got,
        }
    }
}

/// Result type for Ratlisp operations
pub type Result<T> = std::result::Result<T, Error>;
