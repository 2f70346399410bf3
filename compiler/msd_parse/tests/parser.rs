//! End-to-end parser tests over whole programs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use msd_ir::{ExprKind, StringInterner};
use msd_parse::parse_source;
use pretty_assertions::assert_eq;

fn parses(source: &str) -> bool {
    parse_source(source, &mut StringInterner::new()).is_ok()
}

fn message(source: &str) -> String {
    parse_source(source, &mut StringInterner::new())
        .unwrap_err()
        .to_string()
}

#[test]
fn sample_programs_parse() {
    for source in [
        "1+2*3",
        "(_fun (x) x+1)(5)",
        "_if _true _then 1 _else 2",
        "_let x = 1 _in _let x = 2 _in x",
        "_let x = 1 _in _let f = _fun (y) x _in _let x = 2 _in f(99)",
        "_let f = _fun (x) x _in f()",
        "_let factrl = _fun (factrl)
           _fun (x)
             _if x == 1
             _then 1
             _else x * factrl(factrl)(x + -1)
         _in factrl(factrl)(10)",
    ] {
        assert!(parses(source), "{source}");
    }
}

#[test]
fn syntax_error_messages() {
    assert_eq!(message("_let x = 1"), "expected `_in`, found end of input");
    assert_eq!(
        message("(1 + 2"),
        "unclosed parenthesis: expected `)`, found end of input"
    );
    assert_eq!(
        message("1 + -"),
        "malformed number: `-` must be followed by digits (expected an expression)"
    );
    assert_eq!(
        message("_while 1"),
        "unknown keyword `_while` (expected an expression)"
    );
    assert_eq!(message("_fun x x"), "expected `(`, found an identifier");
}

#[test]
fn minimum_integer_literal() {
    let mut interner = StringInterner::new();
    let output = parse_source("-9223372036854775808", &mut interner).unwrap();
    assert_eq!(output.arena.kind(output.root), &ExprKind::Num(i64::MIN));
}

#[test]
fn one_minus_two_is_two_numbers() {
    assert_eq!(
        message("1 -2"),
        "expected end of input, found a number"
    );
}
