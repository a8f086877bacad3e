use std::fmt;

use serde::{Deserialize, Serialize};

/// The single universal node of the interpreter: atoms, proper lists
/// and cons pairs all share this shape.
///
/// A node is a *leaf* when it has no children; only then is its label
/// an atomic value (symbol or number literal). An interior node whose
/// label is `"."` with exactly two children is a *dot-pair* (a Lisp
/// cons cell); any other interior node is a *list-form*. Labels of
/// list-forms are arbitrary tags and never rendered.
///
/// Trees have value semantics: `Clone` deep-copies every subtree, and
/// there is no aliasing between separate trees. Equality is structural
/// over label and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicTree {
    /// Atomic value for leaves; structural tag (`"."` for dot-pairs)
    /// for interior nodes
    pub label: String,
    /// Ordered subtrees; insertion order is argument/element order
    children: Vec<SymbolicTree>,
}

impl SymbolicTree {
    /// Creates a leaf node carrying an atomic value
    pub fn leaf(label: impl Into<String>) -> Self {
        SymbolicTree {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a list-form node from its ordered elements
    pub fn list(children: Vec<SymbolicTree>) -> Self {
        SymbolicTree {
            label: String::new(),
            children,
        }
    }

    /// Creates an interior node with an explicit structural tag
    pub fn tagged(label: impl Into<String>, children: Vec<SymbolicTree>) -> Self {
        SymbolicTree {
            label: label.into(),
            children,
        }
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterates the children in order
    pub fn children(&self) -> std::slice::Iter<'_, SymbolicTree> {
        self.children.iter()
    }

    /// Returns the child at `index`, if any
    pub fn child(&self, index: usize) -> Option<&SymbolicTree> {
        self.children.get(index)
    }

    /// Returns the first child, if any
    pub fn first_child(&self) -> Option<&SymbolicTree> {
        self.children.first()
    }

    /// Appends a subtree, taking ownership of it
    pub fn push_child(&mut self, subtree: SymbolicTree) {
        self.children.push(subtree);
    }

    /// Removes and returns the child at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of bounds, like `Vec::remove`.
    pub fn remove_child(&mut self, position: usize) -> SymbolicTree {
        self.children.remove(position)
    }

    /// Replaces the first child with `subtree`, returning the old one.
    /// Used by the evaluator to substitute a bound operator symbol.
    ///
    /// # Panics
    /// Panics if the node is a leaf.
    pub fn replace_first_child(&mut self, subtree: SymbolicTree) -> SymbolicTree {
        std::mem::replace(&mut self.children[0], subtree)
    }

    /// Returns true if the node is a dot-pair: labeled `"."` with
    /// exactly two children
    pub fn is_dot_pair(&self) -> bool {
        self.label == "." && self.children.len() == 2
    }

    /// Mutable iteration over the children, for in-place passes
    pub(crate) fn children_mut(&mut self) -> std::slice::IterMut<'_, SymbolicTree> {
        self.children.iter_mut()
    }
}

impl fmt::Display for SymbolicTree {
    /// The user-visible rendering contract: leaves print their label,
    /// dot-pairs print `(A . B)`, other interior nodes print
    /// `(A B C)` space-separated.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.label);
        }

        if self.is_dot_pair() {
            return write!(f, "({} . {})", self.children[0], self.children[1]);
        }

        write!(f, "(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(labels: &[&str]) -> SymbolicTree {
        SymbolicTree::list(labels.iter().copied().map(SymbolicTree::leaf).collect())
    }

    #[test]
    fn test_leaf_predicates() {
        let leaf = SymbolicTree::leaf("x");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.child_count(), 0);

        let list = list_of(&["a", "b"]);
        assert!(!list.is_leaf());
        assert_eq!(list.child_count(), 2);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(list_of(&["a", "b"]), list_of(&["a", "b"]));
        assert_ne!(list_of(&["a", "b"]), list_of(&["b", "a"]));
        assert_ne!(list_of(&["a"]), list_of(&["a", "a"]));
        assert_ne!(SymbolicTree::leaf("a"), list_of(&["a"]));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = list_of(&["a", "b"]);
        let mut copy = original.clone();
        copy.remove_child(0);

        assert_eq!(original.child_count(), 2);
        assert_eq!(copy.child_count(), 1);
    }

    #[test]
    fn test_replace_first_child() {
        let mut tree = list_of(&["f", "x"]);
        let old = tree.replace_first_child(SymbolicTree::leaf("g"));

        assert_eq!(old, SymbolicTree::leaf("f"));
        assert_eq!(tree.first_child().unwrap().label, "g");
        assert_eq!(tree.child_count(), 2);
    }

    #[test]
    fn test_display_leaf() {
        assert_eq!(SymbolicTree::leaf("42").to_string(), "42");
    }

    #[test]
    fn test_display_list() {
        assert_eq!(list_of(&["+", "1", "2"]).to_string(), "(+ 1 2)");
    }

    #[test]
    fn test_display_nested() {
        let mut outer = list_of(&["*"]);
        outer.push_child(list_of(&["+", "1", "2"]));
        outer.push_child(SymbolicTree::leaf("3"));
        assert_eq!(outer.to_string(), "(* (+ 1 2) 3)");
    }

    #[test]
    fn test_display_dot_pair() {
        let pair = SymbolicTree::tagged(
            ".",
            vec![SymbolicTree::leaf("a"), SymbolicTree::leaf("b")],
        );
        assert_eq!(pair.to_string(), "(a . b)");
    }

    #[test]
    fn test_dot_pair_requires_two_children() {
        let three = SymbolicTree::tagged(
            ".",
            vec![
                SymbolicTree::leaf("a"),
                SymbolicTree::leaf("b"),
                SymbolicTree::leaf("c"),
            ],
        );
        assert!(!three.is_dot_pair());
        // Renders as a plain list-form, not a pair
        assert_eq!(three.to_string(), "(a b c)");
    }
}
