use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::{dot, SymbolicTree};

/// S-expression parser: a stack-based bracket matcher.
///
/// `(` opens a subtree, `)` closes it and attaches it to the enclosing
/// one, and every atom becomes a leaf of the current subtree. Interior
/// nodes are created with the empty label; the dot normalizer then
/// rewrites `(a . b)` sites before the tree is handed to the
/// evaluator.
pub struct SExprParser {
    tokens: Vec<Token>,
}

impl SExprParser {
    /// Creates a new parser over a scanned token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens }
    }

    /// Parses the tokens into exactly one dot-normalized tree.
    ///
    /// Fails with `UnbalancedParens` on an unclosed `(` or a stray
    /// `)`, `MultipleTopLevelForms` when more than one root expression
    /// is present, and `EmptyInput` when there is none.
    pub fn parse(&mut self) -> Result<SymbolicTree> {
        // The bottom of the stack collects top-level expressions
        let mut stack: Vec<SymbolicTree> = vec![SymbolicTree::list(Vec::new())];

        for token in &self.tokens {
            match &token.kind {
                TokenKind::LeftParen => {
                    stack.push(SymbolicTree::list(Vec::new()));
                }
                TokenKind::RightParen => {
                    if stack.len() == 1 {
                        return Err(Error::UnbalancedParens {
                            message: format!(
                                "unexpected ')' at line {}, column {}",
                                token.line, token.column
                            ),
                        });
                    }
                    let sub = stack.pop().expect("checked depth");
                    stack
                        .last_mut()
                        .expect("stack is never empty")
                        .push_child(sub);
                }
                TokenKind::Atom(text) => {
                    stack
                        .last_mut()
                        .expect("stack is never empty")
                        .push_child(SymbolicTree::leaf(text.clone()));
                }
                TokenKind::Eof => break,
            }
        }

        if stack.len() != 1 {
            return Err(Error::UnbalancedParens {
                message: format!("{} unclosed '('", stack.len() - 1),
            });
        }

        let mut root = stack.pop().expect("checked depth");
        match root.child_count() {
            0 => Err(Error::EmptyInput),
            1 => {
                let mut tree = root.remove_child(0);
                dot::normalize_dots(&mut tree);
                Ok(tree)
            }
            _ => Err(Error::MultipleTopLevelForms),
        }
    }
}
