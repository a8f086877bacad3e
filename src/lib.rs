//! # Ratlisp - a minimal Lisp over symbolic trees
//!
//! A small Lisp-family interpreter: text in, evaluated symbolic
//! expression out. One generic n-ary tree models atoms, proper lists
//! and `cons` pairs; the evaluator walks it, dispatching special forms
//! and primitive functions, with exact rational numbers as the sole
//! numeric representation.
//!
//! ## Quick Start
//!
//! ```rust
//! use ratlisp::{Interpreter, Scanner, SExprParser};
//!
//! # fn main() -> ratlisp::Result<()> {
//! let tokens = Scanner::new("(+ 1 2/4)").scan_tokens()?;
//! let tree = SExprParser::new(tokens).parse()?;
//!
//! let mut interpreter = Interpreter::new();
//! let result = interpreter.interpret(tree)?;
//!
//! assert_eq!(result.to_string(), "3/2");
//! # Ok(())
//! # }
//! ```
//!
//! Bindings persist across calls on the same interpreter, which is how
//! a multi-line session carries `define` between inputs:
//!
//! ```rust
//! use ratlisp::{Interpreter, Scanner, SExprParser};
//!
//! fn run(interpreter: &mut Interpreter, source: &str) -> ratlisp::Result<String> {
//!     let tokens = Scanner::new(source).scan_tokens()?;
//!     let tree = SExprParser::new(tokens).parse()?;
//!     Ok(interpreter.interpret(tree)?.to_string())
//! }
//!
//! # fn main() -> ratlisp::Result<()> {
//! let mut interpreter = Interpreter::new();
//! run(&mut interpreter, "(define x 5)")?;
//! assert_eq!(run(&mut interpreter, "(* x x)")?, "25");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → SExprParser → SymbolicTree → Interpreter → SymbolicTree
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - Tokenizes source into parentheses and atoms
//! - [`SExprParser`] - Matches brackets into one tree per expression
//!   and folds `(a . b)` dot notation
//! - [`SymbolicTree`] - The universal node: leaf, list-form, or
//!   dot-pair
//! - [`Rational`] - Exact fraction arithmetic
//! - [`Interpreter`] - Evaluates trees; owns the session's bindings
//!
//! ## Language
//!
//! - **Special forms**: `(quote e)`, `(define name e)`
//! - **Arithmetic**: `(+ ...)`, `(- ...)`, `(* ...)`, `(/ a b ...)`
//!   over exact rationals: `(/ 1 3)` is `1/3`, not a float
//! - **Pairs and lists**: `(cons a b)`, `(car p)`, `(cdr p)`,
//!   `(atom? e)`, `(eq? a b)`, `(a . b)` dotted input
//!
//! Unrecognized atoms are self-quoting; `define`d names are resolved
//! by substitution and re-evaluation at use time (late binding).
//!
//! ## Error Handling
//!
//! Every failure surfaces as a typed [`Error`]; an error aborts the
//! current `interpret` call with no partial result. The REPL layer
//! reports it and moves on to the next input:
//!
//! ```rust
//! use ratlisp::{Error, Interpreter, Scanner, SExprParser};
//!
//! let tokens = Scanner::new("(/ 1 0)").scan_tokens().unwrap();
//! let tree = SExprParser::new(tokens).parse().unwrap();
//! let result = Interpreter::new().interpret(tree);
//!
//! assert_eq!(result, Err(Error::DivisionByZero));
//! ```

/// Version of the Ratlisp interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::SExprParser;
pub use runtime::{Bindings, Interpreter, Rational, SymbolicTree};
