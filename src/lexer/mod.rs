//! Lexical analysis for Ratlisp
//!
//! Converts source text into a stream of tokens: parentheses and
//! whitespace-delimited atoms.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
