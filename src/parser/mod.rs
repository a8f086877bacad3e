//! Ratlisp parser module
//!
//! Turns a token stream into a single dot-normalized [`SymbolicTree`],
//! one root per top-level expression.
//!
//! [`SymbolicTree`]: crate::runtime::SymbolicTree

mod sexpr;

pub use sexpr::SExprParser;
