use crate::error::{Error, Result};
use crate::runtime::{dot, Bindings, Rational, SymbolicTree};

/// Default evaluation depth limit. Substitution-based variable
/// resolution can loop on self-referential bindings, so evaluation
/// carries a depth counter instead of recursing until the stack dies.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Operators whose arguments are passed through unevaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialForm {
    Quote,
    Define,
}

impl SpecialForm {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "quote" => Some(SpecialForm::Quote),
            "define" => Some(SpecialForm::Define),
            _ => None,
        }
    }
}

/// Primitive functions, applied to already-evaluated arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Add,
    Mul,
    Sub,
    Div,
    Eq,
    Cons,
    Car,
    Cdr,
    IsAtom,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Builtin::Add),
            "*" => Some(Builtin::Mul),
            "-" => Some(Builtin::Sub),
            "/" => Some(Builtin::Div),
            "eq?" => Some(Builtin::Eq),
            "cons" => Some(Builtin::Cons),
            "car" => Some(Builtin::Car),
            "cdr" => Some(Builtin::Cdr),
            "atom?" => Some(Builtin::IsAtom),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Mul => "*",
            Builtin::Sub => "-",
            Builtin::Div => "/",
            Builtin::Eq => "eq?",
            Builtin::Cons => "cons",
            Builtin::Car => "car",
            Builtin::Cdr => "cdr",
            Builtin::IsAtom => "atom?",
        }
    }
}

/// The tree-walking evaluator.
///
/// One instance owns one session: its binding table persists across
/// [`interpret`](Interpreter::interpret) calls, which is how `define`
/// carries over between inputs of a REPL. Evaluation is synchronous
/// recursive descent with no state beyond the bindings and a depth
/// counter.
pub struct Interpreter {
    bindings: Bindings,
    max_depth: usize,
}

impl Interpreter {
    /// Creates an interpreter with an empty binding table
    pub fn new() -> Self {
        Interpreter {
            bindings: Bindings::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates an interpreter with a custom evaluation depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Interpreter {
            bindings: Bindings::new(),
            max_depth,
        }
    }

    /// Read access to the session's binding table
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Reduces a tree to its final form.
    ///
    /// The sole entry point. Deterministic; an error aborts the whole
    /// call with no partial result. Expects a dot-normalized tree (the
    /// parser runs [`dot::normalize_dots`] before handing trees over).
    pub fn interpret(&mut self, tree: SymbolicTree) -> Result<SymbolicTree> {
        self.eval(tree, 0)
    }

    fn eval(&mut self, mut tree: SymbolicTree, depth: usize) -> Result<SymbolicTree> {
        if depth >= self.max_depth {
            return Err(Error::RecursionLimit {
                limit: self.max_depth,
            });
        }

        if tree.is_leaf() {
            // A bound name evaluates to its (re-evaluated) value; any
            // other atom is self-quoting
            if let Some(value) = self.bindings.get(&tree.label).cloned() {
                tracing::trace!(name = %tree.label, "substituting binding");
                return self.eval(value, depth + 1);
            }
            return Ok(tree);
        }

        let head_is_leaf = tree
            .first_child()
            .map(SymbolicTree::is_leaf)
            .unwrap_or(false);
        if !head_is_leaf {
            // Application of a compound expression: out of scope,
            // returned untouched rather than rejected
            return Ok(tree);
        }

        let name = tree.first_child().expect("non-leaf has a head").label.clone();

        if let Some(form) = SpecialForm::from_name(&name) {
            // Special forms see their argument trees raw
            let args = build_args(&tree);
            return self.apply_special(form, args);
        }

        if let Some(builtin) = Builtin::from_name(&name) {
            let mut args = build_args(&tree);
            for arg in &mut args {
                let raw = std::mem::replace(arg, SymbolicTree::leaf(""));
                *arg = self.eval(raw, depth + 1)?;
            }
            return self.apply_builtin(builtin, args);
        }

        if let Some(value) = self.bindings.get(&name).cloned() {
            // A name bound to an operator symbol becomes callable:
            // substitute the head and start over on the mutated node
            tracing::trace!(name = %name, "substituting bound operator");
            tree.replace_first_child(value);
            return self.eval(tree, depth + 1);
        }

        Err(Error::NotApplicable { name })
    }

    fn apply_special(&mut self, form: SpecialForm, mut args: Vec<SymbolicTree>) -> Result<SymbolicTree> {
        match form {
            SpecialForm::Quote => {
                if args.len() != 1 {
                    return Err(Error::arity("quote", 1, args.len()));
                }
                Ok(args.pop().expect("checked length"))
            }
            SpecialForm::Define => {
                if args.len() != 2 {
                    return Err(Error::arity("define", 2, args.len()));
                }
                let value = args.pop().expect("checked length");
                let name_leaf = args.pop().expect("checked length");
                if !name_leaf.is_leaf() {
                    return Err(Error::InvalidSyntax {
                        form: "define".to_string(),
                        message: "the name must be a bare symbol".to_string(),
                    });
                }
                tracing::debug!(name = %name_leaf.label, value = %value, "define");
                // The value stays unevaluated: lookups re-evaluate it,
                // so later redefinitions of its free names are seen
                self.bindings.define(name_leaf.label.clone(), value);
                Ok(name_leaf)
            }
        }
    }

    fn apply_builtin(&mut self, builtin: Builtin, args: Vec<SymbolicTree>) -> Result<SymbolicTree> {
        match builtin {
            Builtin::Add => {
                let nums = to_rationals(builtin.name(), &args)?;
                let sum = nums
                    .into_iter()
                    .try_fold(Rational::zero(), |acc, n| acc.add(n))?;
                Ok(SymbolicTree::leaf(sum.to_string()))
            }
            Builtin::Mul => {
                let nums = to_rationals(builtin.name(), &args)?;
                let product = nums
                    .into_iter()
                    .try_fold(Rational::integer(1), |acc, n| acc.mul(n))?;
                Ok(SymbolicTree::leaf(product.to_string()))
            }
            Builtin::Sub => {
                let nums = to_rationals(builtin.name(), &args)?;
                let mut iter = nums.into_iter();
                let first = iter.next().expect("arity checked");
                let result = match iter.len() {
                    0 => first.neg()?,
                    _ => iter.try_fold(first, |acc, n| acc.sub(n))?,
                };
                Ok(SymbolicTree::leaf(result.to_string()))
            }
            Builtin::Div => {
                if args.len() < 2 {
                    return Err(Error::arity_at_least("/", 2, args.len()));
                }
                let nums = to_rationals(builtin.name(), &args)?;
                let mut iter = nums.into_iter();
                let mut result = iter.next().expect("arity checked");
                for n in iter {
                    result = result.div(n)?;
                }
                Ok(SymbolicTree::leaf(result.to_string()))
            }
            Builtin::Eq => {
                if args.len() != 2 {
                    return Err(Error::arity("eq?", 2, args.len()));
                }
                Ok(bool_leaf(args[0] == args[1]))
            }
            Builtin::Cons => {
                if args.len() != 2 {
                    return Err(Error::arity("cons", 2, args.len()));
                }
                let mut args = args.into_iter();
                let a = args.next().expect("checked length");
                let b = args.next().expect("checked length");
                Ok(dot::cons(a, b))
            }
            Builtin::Car => {
                if args.len() != 1 {
                    return Err(Error::arity("car", 1, args.len()));
                }
                dot::car(&args[0])
            }
            Builtin::Cdr => {
                if args.len() != 1 {
                    return Err(Error::arity("cdr", 1, args.len()));
                }
                dot::cdr(&args[0])
            }
            Builtin::IsAtom => {
                if args.len() != 1 {
                    return Err(Error::arity("atom?", 1, args.len()));
                }
                Ok(bool_leaf(args[0].is_leaf()))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// The argument list of an application: every child but the head
fn build_args(tree: &SymbolicTree) -> Vec<SymbolicTree> {
    tree.children().skip(1).cloned().collect()
}

/// Converts evaluated arguments to rationals, requiring at least one.
/// Any non-leaf or non-numeric leaf fails with `NotANumber`.
fn to_rationals(name: &str, args: &[SymbolicTree]) -> Result<Vec<Rational>> {
    if args.is_empty() {
        return Err(Error::arity_at_least(name, 1, 0));
    }

    args.iter()
        .map(|arg| {
            if !arg.is_leaf() {
                return Err(Error::NotANumber {
                    text: arg.to_string(),
                });
            }
            arg.label.parse()
        })
        .collect()
}

fn bool_leaf(value: bool) -> SymbolicTree {
    SymbolicTree::leaf(if value { "1" } else { "0" })
}
