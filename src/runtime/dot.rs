//! Dotted-pair handling: the post-parse normalizer that folds
//! `(a . b)` into a two-child node labeled `"."`, and the `cons`/
//! `car`/`cdr` primitives built on that shape.
//!
//! Folding pairs and lists into the same physical shape (an ordered
//! children sequence) is what lets `car` and `cdr` treat both
//! uniformly.

use crate::error::{Error, Result};
use crate::runtime::SymbolicTree;

/// Recursively rewrites every `(a . b)` site in place: a node with
/// exactly three children whose middle child is the leaf `"."` loses
/// that child and is relabeled `"."`.
///
/// Structure-preserving everywhere else, and idempotent: a dot-pair
/// has two children, so a second pass never matches again.
pub fn normalize_dots(tree: &mut SymbolicTree) {
    if tree.is_leaf() {
        return;
    }

    if tree.child_count() == 3 {
        let middle = tree.child(1).expect("three children");
        if middle.is_leaf() && middle.label == "." {
            tree.remove_child(1);
            tree.label = ".".to_string();
        }
    }

    for child in tree.children_mut() {
        normalize_dots(child);
    }
}

/// Builds a fresh cons cell `(a . b)`. Always a dot-pair, even when
/// `b` is itself a list; building a proper list is the caller's job.
pub fn cons(a: SymbolicTree, b: SymbolicTree) -> SymbolicTree {
    SymbolicTree::tagged(".", vec![a, b])
}

/// Returns the first element of a pair or list. Fails on atoms.
pub fn car(tree: &SymbolicTree) -> Result<SymbolicTree> {
    if tree.is_leaf() {
        return Err(Error::NotApplicableToAtom {
            op: "car".to_string(),
        });
    }

    // Pairs and lists store their head the same way
    Ok(tree.first_child().expect("non-leaf has a child").clone())
}

/// Returns the tail: the second child of a dot-pair verbatim, or the
/// list without its first element. Fails on atoms.
pub fn cdr(tree: &SymbolicTree) -> Result<SymbolicTree> {
    if tree.is_leaf() {
        return Err(Error::NotApplicableToAtom {
            op: "cdr".to_string(),
        });
    }

    if tree.is_dot_pair() {
        return Ok(tree.child(1).expect("dot-pair has two children").clone());
    }

    let mut rest = tree.clone();
    rest.remove_child(0);
    Ok(rest)
}
