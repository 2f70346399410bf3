//! Property tests for evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use msd_eval::{EvalErrorKind, Interpreter, Value};
use msd_ir::{SharedArena, StringInterner};
use msd_parse::parse_source;
use proptest::prelude::*;

fn eval(source: &str) -> Result<Value, EvalErrorKind> {
    let mut interner = StringInterner::new();
    let output = parse_source(source, &mut interner).unwrap();
    let arena = SharedArena::new(output.arena);
    Interpreter::new(&arena, &interner)
        .eval_root(output.root)
        .map_err(|e| e.kind)
}

/// Small arithmetic programs over a handful of variables.
fn arith_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (-1000i64..1000).prop_map(|n| n.to_string()),
        Just("a".to_owned()),
        Just("b".to_owned()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({l} + {r})")),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({l} * {r})")),
            (inner.clone(), inner).prop_map(|(v, b)| format!("(_let a = {v} _in {b})")),
        ]
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(body in arith_source(), a in -50i64..50, b in -50i64..50) {
        let source = format!("_let a = {a} _in _let b = {b} _in {body}");
        let first = eval(&source);
        let second = eval(&source);
        prop_assert_eq!(first.map(|v| v.to_string()), second.map(|v| v.to_string()));
    }

    #[test]
    fn addition_matches_checked_add(x in any::<i64>(), y in any::<i64>()) {
        let result = eval(&format!("{x} + {y}"));
        match x.checked_add(y) {
            Some(sum) => prop_assert_eq!(result, Ok(Value::Int(sum))),
            None => prop_assert_eq!(
                result,
                Err(EvalErrorKind::IntegerOverflow { operation: "addition" })
            ),
        }
    }

    #[test]
    fn multiplication_matches_checked_mul(x in any::<i64>(), y in any::<i64>()) {
        let result = eval(&format!("{x} * {y}"));
        match x.checked_mul(y) {
            Some(product) => prop_assert_eq!(result, Ok(Value::Int(product))),
            None => prop_assert_eq!(
                result,
                Err(EvalErrorKind::IntegerOverflow { operation: "multiplication" })
            ),
        }
    }

    #[test]
    fn zero_absorbs_any_factor(x in any::<i64>()) {
        prop_assert_eq!(eval(&format!("{x} * 0")), Ok(Value::Int(0)));
        prop_assert_eq!(eval(&format!("0 * {x}")), Ok(Value::Int(0)));
    }
}
