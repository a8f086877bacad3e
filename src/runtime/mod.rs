//! Runtime core: the symbolic tree model, rational arithmetic, dotted
//! pair handling and the tree-walking evaluator

mod bindings;
pub mod dot;
mod interpreter;
mod rational;
mod tree;

pub use bindings::Bindings;
pub use interpreter::{Interpreter, DEFAULT_MAX_DEPTH};
pub use rational::Rational;
pub use tree::SymbolicTree;
