//! End-to-end integration tests: Scanner → SExprParser → Interpreter
//! working together on full source strings.

use ratlisp::{Error, Interpreter, Scanner, SExprParser, SymbolicTree};

fn run(interpreter: &mut Interpreter, source: &str) -> ratlisp::Result<SymbolicTree> {
    let tokens = Scanner::new(source).scan_tokens()?;
    let tree = SExprParser::new(tokens).parse()?;
    interpreter.interpret(tree)
}

fn eval(source: &str) -> ratlisp::Result<SymbolicTree> {
    run(&mut Interpreter::new(), source)
}

fn eval_str(source: &str) -> String {
    eval(source).unwrap().to_string()
}

#[test]
fn test_e2e_arithmetic() {
    assert_eq!(eval_str("(+ 1 2)"), "3");
    assert_eq!(eval_str("(- 5)"), "-5");
    assert_eq!(eval_str("(* 2/4 2)"), "1");
    assert_eq!(eval_str("(/ 1 3)"), "1/3");
    assert_eq!(eval_str("(+ (/ 1 2) (/ 1 2))"), "1");
}

#[test]
fn test_e2e_deeply_nested_arithmetic() {
    assert_eq!(eval_str("(+ (* 2 (- 7 3)) (/ 9 (+ 1 2)))"), "11");
}

#[test]
fn test_e2e_exact_fractions_never_truncate() {
    // 1/3 + 1/3 + 1/3 is exactly 1
    assert_eq!(eval_str("(+ (/ 1 3) (/ 1 3) (/ 1 3))"), "1");
    assert_eq!(eval_str("(/ 10 4)"), "5/2");
}

#[test]
fn test_e2e_arithmetic_at_i64_limits() {
    // Results that leave the i64 range surface a typed error, never
    // a panic or a wrapped value
    assert_eq!(eval("(- -9223372036854775808)"), Err(Error::NumericOverflow));
    assert_eq!(eval("(+ 9223372036854775807 1)"), Err(Error::NumericOverflow));
    assert_eq!(eval("(* 4000000000 4000000000)"), Err(Error::NumericOverflow));

    // In-range results near the limits still come out exact
    assert_eq!(eval_str("(+ 9223372036854775807 0)"), "9223372036854775807");
    assert_eq!(eval_str("(- 9223372036854775807 1)"), "9223372036854775806");
}

#[test]
fn test_e2e_large_denominators_stay_exact() {
    // Cross-multiplied denominators exceed i64 mid-computation; the
    // reduced result fits and must come out exact
    assert_eq!(eval_str("(+ 1/4000000000 1/4000000000)"), "1/2000000000");
    assert_eq!(eval_str("(* 1/3000000000 3000000000)"), "1");
}

#[test]
fn test_e2e_division_arity() {
    assert!(matches!(eval("(/ 5)"), Err(Error::ArityError { .. })));
}

#[test]
fn test_e2e_quote_preserves_shape() {
    assert_eq!(eval_str("(quote (+ 1 2))"), "(+ 1 2)");
    assert_eq!(eval_str("(quote (a (b c) d))"), "(a (b c) d)");
}

#[test]
fn test_e2e_dotted_pair_round_trip() {
    // `(a . b)` parses to a two-child dot node and renders back
    // bit-for-bit
    assert_eq!(eval_str("(quote (a . b))"), "(a . b)");
}

#[test]
fn test_e2e_cons_car_cdr() {
    assert_eq!(eval_str("(cons 1 (quote (2 3)))"), "(1 . (2 3))");
    assert_eq!(eval_str("(car (cons (quote (a b)) 2))"), "(a b)");
    assert_eq!(eval_str("(cdr (quote (a b)))"), "(b)");
    assert_eq!(eval_str("(car (cdr (quote (1 2 3))))"), "2");
}

#[test]
fn test_e2e_atom_predicate() {
    assert_eq!(eval_str("(atom? 5)"), "1");
    assert_eq!(eval_str("(atom? (quote x))"), "1");
    assert_eq!(eval_str("(atom? (quote (1 2)))"), "0");
}

#[test]
fn test_e2e_eq() {
    assert_eq!(eval_str("(eq? (quote (a b)) (quote (a b)))"), "1");
    assert_eq!(eval_str("(eq? (quote (a b)) (quote (a (b))))"), "0");
    assert_eq!(eval_str("(eq? (* 2 3) (+ 3 3))"), "1");
}

#[test]
fn test_e2e_define_session() {
    let mut interpreter = Interpreter::new();

    assert_eq!(run(&mut interpreter, "(define x 5)").unwrap().to_string(), "x");
    assert_eq!(run(&mut interpreter, "x").unwrap().to_string(), "5");
    assert_eq!(run(&mut interpreter, "(+ x x)").unwrap().to_string(), "10");

    // Redefinition is seen by everything evaluated afterwards
    run(&mut interpreter, "(define x 7)").unwrap();
    assert_eq!(run(&mut interpreter, "(+ x x)").unwrap().to_string(), "14");
}

#[test]
fn test_e2e_late_binding() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, "(define double (* 2 n))").unwrap();

    // n is defined after double and still picked up at use time
    run(&mut interpreter, "(define n 21)").unwrap();
    assert_eq!(run(&mut interpreter, "double").unwrap().to_string(), "42");

    run(&mut interpreter, "(define n 5)").unwrap();
    assert_eq!(run(&mut interpreter, "double").unwrap().to_string(), "10");
}

#[test]
fn test_e2e_bound_operator() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, "(define add +)").unwrap();
    assert_eq!(run(&mut interpreter, "(add 1 2 3)").unwrap().to_string(), "6");
}

#[test]
fn test_e2e_define_bound_to_list() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, "(define xs (quote (1 2 3)))").unwrap();
    assert_eq!(run(&mut interpreter, "(car xs)").unwrap().to_string(), "1");
    assert_eq!(run(&mut interpreter, "(cdr xs)").unwrap().to_string(), "(2 3)");
}

#[test]
fn test_e2e_unknown_operator() {
    assert_eq!(
        eval("(foo 1 2)"),
        Err(Error::NotApplicable {
            name: "foo".to_string()
        })
    );
}

#[test]
fn test_e2e_parse_errors() {
    assert!(matches!(eval("(+ 1 2"), Err(Error::UnbalancedParens { .. })));
    assert!(matches!(eval(")"), Err(Error::UnbalancedParens { .. })));
    assert_eq!(eval("1 2"), Err(Error::MultipleTopLevelForms));
    assert_eq!(eval(""), Err(Error::EmptyInput));
}

#[test]
fn test_e2e_errors_do_not_poison_session() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, "(define x 3)").unwrap();

    assert!(run(&mut interpreter, "(/ x 0)").is_err());

    // The failed evaluation left the bindings intact
    assert_eq!(run(&mut interpreter, "(* x x)").unwrap().to_string(), "9");
}

#[test]
fn test_e2e_self_referential_define_is_guarded() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, "(define loop loop)").unwrap();
    assert!(matches!(
        run(&mut interpreter, "loop"),
        Err(Error::RecursionLimit { .. })
    ));
}

#[test]
fn test_e2e_comments_ignored() {
    assert_eq!(eval_str("(+ 1 2) ; adds things"), "3");
}
