use std::collections::HashMap;

use crate::runtime::SymbolicTree;

/// Flat, session-wide binding table: symbol name to unevaluated tree.
///
/// Written only by `define`, read on every symbol lookup. There is no
/// scoping or nesting; a redefinition replaces the old value for all
/// subsequent lookups. Owned by one interpreter instance, never shared
/// between sessions.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, SymbolicTree>,
}

impl Bindings {
    /// Creates an empty binding table
    pub fn new() -> Self {
        Bindings {
            values: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding
    pub fn define(&mut self, name: String, value: SymbolicTree) {
        self.values.insert(name, value);
    }

    /// Looks up the tree bound to `name`
    pub fn get(&self, name: &str) -> Option<&SymbolicTree> {
        self.values.get(name)
    }

    /// Returns true if `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been defined yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut bindings = Bindings::new();
        bindings.define("x".to_string(), SymbolicTree::leaf("5"));

        assert_eq!(bindings.get("x"), Some(&SymbolicTree::leaf("5")));
        assert!(bindings.contains("x"));
    }

    #[test]
    fn test_unbound_name() {
        let bindings = Bindings::new();
        assert_eq!(bindings.get("missing"), None);
        assert!(!bindings.contains("missing"));
    }

    #[test]
    fn test_redefinition_replaces() {
        let mut bindings = Bindings::new();
        bindings.define("x".to_string(), SymbolicTree::leaf("5"));
        bindings.define("x".to_string(), SymbolicTree::leaf("6"));

        assert_eq!(bindings.get("x"), Some(&SymbolicTree::leaf("6")));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_bound_value_may_be_a_tree() {
        let mut bindings = Bindings::new();
        let expr = SymbolicTree::list(vec![
            SymbolicTree::leaf("+"),
            SymbolicTree::leaf("1"),
            SymbolicTree::leaf("2"),
        ]);
        bindings.define("sum".to_string(), expr.clone());

        assert_eq!(bindings.get("sum"), Some(&expr));
    }
}
