#![allow(clippy::unwrap_used, clippy::expect_used)]

use msd_ir::{Span, StringInterner};
use pretty_assertions::assert_eq;

use super::*;
use crate::{EvalError, EvalErrorKind};

fn run_with(source: &str, config: EvalConfig) -> Result<Value, EvalError> {
    let mut interner = StringInterner::new();
    let output = msd_parse::parse_source(source, &mut interner).unwrap();
    let arena = SharedArena::new(output.arena);
    Interpreter::new(&arena, &interner)
        .with_config(config)
        .eval_root(output.root)
}

fn run(source: &str) -> Result<Value, EvalError> {
    run_with(source, EvalConfig::default())
}

fn display(source: &str) -> String {
    match run(source) {
        Ok(value) => value.to_string(),
        Err(error) => panic!("{source:?} failed: {error}"),
    }
}

fn error(source: &str) -> EvalError {
    run(source).unwrap_err()
}

#[test]
fn literals() {
    assert_eq!(display("42"), "42");
    assert_eq!(display("-3"), "-3");
    assert_eq!(display("_true"), "_true");
    assert_eq!(display("_false"), "_false");
    assert_eq!(display("_fun (x) x"), "[function]");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(display("1+2*3"), "7");
    assert_eq!(display("(1+2)*3"), "9");
    assert_eq!(display("2 * 3 + 4 * 5"), "26");
}

#[test]
fn equality() {
    assert_eq!(display("1 + 1 == 2"), "_true");
    assert_eq!(display("1 == _true"), "_false");
    assert_eq!(display("_true == _true"), "_true");
    assert_eq!(display("_fun (x) x == _fun (x) x"), "[function]");
}

#[test]
fn closures_equal_only_with_same_environment() {
    assert_eq!(
        display("_let f = _fun (x) x _in f == f"),
        "_true"
    );
    assert_eq!(
        display("(_fun (x) x) == (_fun (x) x)"),
        "_true"
    );
    assert_eq!(
        display("_let mk = _fun (a) _fun (x) x _in mk(1) == mk(1)"),
        "_false"
    );
}

#[test]
fn if_takes_one_branch() {
    assert_eq!(display("_if _true _then 1 _else 2"), "1");
    assert_eq!(display("_if 1 == 2 _then 1 _else 2"), "2");
    assert_eq!(display("_if _true _then 1 _else unbound"), "1");
    assert_eq!(display("_if _false _then 1 + _true _else 3"), "3");
}

#[test]
fn if_condition_must_be_boolean() {
    let error = error("_if 1 _then 1 _else 2");
    assert_eq!(
        error.kind,
        EvalErrorKind::ConditionNotBoolean { found: "number" }
    );
    assert_eq!(error.span, Some(Span::new(4, 5)));
    assert_eq!(error.to_string(), "condition must be boolean, found number");
}

#[test]
fn shadowing() {
    assert_eq!(display("_let x = 1 _in _let x = 2 _in x"), "2");
    assert_eq!(display("_let x = 1 _in (_let x = 2 _in x) + x"), "3");
}

#[test]
fn let_is_not_recursive() {
    assert_eq!(
        error("_let x = x _in x").kind,
        EvalErrorKind::UnboundVariable {
            name: "x".to_owned()
        }
    );
    assert_eq!(display("_let x = 5 _in _let x = x + 1 _in x"), "6");
}

#[test]
fn lexical_scoping() {
    assert_eq!(
        display("_let x = 1 _in _let f = _fun (y) x _in _let x = 2 _in f(99)"),
        "1"
    );
}

#[test]
fn calls() {
    assert_eq!(display("(_fun (x) x+1)(5)"), "6");
    assert_eq!(display("_let f = _fun (x) x _in f()"), "0");
    assert_eq!(
        display("_let add = _fun (x) _fun (y) x + y _in add(3)(4)"),
        "7"
    );
}

#[test]
fn recursion_through_self_application() {
    let source = "_let factrl = _fun (factrl)
                    _fun (x)
                      _if x == 1
                      _then 1
                      _else x * factrl(factrl)(x + -1)
                  _in factrl(factrl)(10)";
    assert_eq!(display(source), "3628800");
}

#[test]
fn argument_uses_callers_environment() {
    assert_eq!(
        display("_let y = 10 _in _let f = _fun (x) x + 1 _in _let y = 20 _in f(y)"),
        "21"
    );
}

#[test]
fn unbound_variable() {
    let error = error("y");
    assert_eq!(
        error.kind,
        EvalErrorKind::UnboundVariable {
            name: "y".to_owned()
        }
    );
    assert_eq!(error.span, Some(Span::new(0, 1)));
}

#[test]
fn function_parameter_not_visible_outside() {
    assert!(matches!(
        error("(_fun (x) x)(1) + x").kind,
        EvalErrorKind::UnboundVariable { .. }
    ));
}

#[test]
fn calling_a_non_function() {
    let error = error("5(1)");
    assert_eq!(error.kind, EvalErrorKind::NotCallable { found: "number" });
    assert_eq!(error.span, Some(Span::new(0, 1)));
}

#[test]
fn type_errors_in_arithmetic() {
    assert_eq!(
        error("1 + _true").kind,
        EvalErrorKind::NonNumericOperand {
            operation: "addition",
            found: "boolean"
        }
    );
    assert_eq!(
        error("(_fun (x) x) * 2").kind,
        EvalErrorKind::NonNumericOperand {
            operation: "multiplication",
            found: "function"
        }
    );
}

#[test]
fn overflow_is_reported_at_the_operation() {
    let error = error("1 + 9223372036854775807");
    assert_eq!(
        error.kind,
        EvalErrorKind::IntegerOverflow {
            operation: "addition"
        }
    );
    assert_eq!(error.span, Some(Span::new(0, 23)));
    assert!(matches!(
        self::error("-9223372036854775808 * -1").kind,
        EvalErrorKind::IntegerOverflow { .. }
    ));
    assert_eq!(display("9223372036854775807 * 0"), "0");
}

#[test]
fn inner_error_propagates_unchanged() {
    let error = error("_let f = _fun (x) x + _true _in 1 + f(2)");
    assert_eq!(
        error.kind,
        EvalErrorKind::NonNumericOperand {
            operation: "addition",
            found: "boolean"
        }
    );
    assert_eq!(error.span, Some(Span::new(18, 27)));
}

#[test]
fn runaway_recursion_hits_the_call_limit() {
    let source = "_let f = _fun (f) f(f) _in f(f)";
    let config = EvalConfig { max_call_depth: 50 };
    assert_eq!(
        run_with(source, config).unwrap_err().kind,
        EvalErrorKind::CallDepthExceeded { limit: 50 }
    );
    assert_eq!(
        error(source).kind,
        EvalErrorKind::CallDepthExceeded { limit: 10_000 }
    );
}

#[test]
fn call_depth_is_restored_after_returning() {
    let config = EvalConfig { max_call_depth: 3 };
    let source = "_let f = _fun (x) x + 1 _in f(1) + f(2) + f(3) + f(4)";
    assert_eq!(run_with(source, config).map(|v| v.to_string()), Ok("14".to_owned()));
}

#[test]
fn closure_from_another_program_uses_its_own_arena() {
    let mut interner = StringInterner::new();

    let first = msd_parse::parse_source("_let k = 100 _in _fun (x) x + k", &mut interner).unwrap();
    let first_arena = SharedArena::new(first.arena);
    let adder = Interpreter::new(&first_arena, &interner)
        .eval_root(first.root)
        .unwrap();

    let second = msd_parse::parse_source("f(1) * 2", &mut interner).unwrap();
    let second_arena = SharedArena::new(second.arena);
    let f = interner.get("f").unwrap();
    let env = Environment::empty().extend(f, adder);

    let result = Interpreter::new(&second_arena, &interner).eval(second.root, &env);
    assert_eq!(result, Ok(Value::Int(202)));
}
