#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::{evaluate, format, format_inline, MsdError};

#[test]
fn evaluate_returns_display_string() {
    assert_eq!(evaluate("1 + 2 * 3").unwrap(), "7");
    assert_eq!(evaluate("1 == 1").unwrap(), "_true");
    assert_eq!(evaluate("_fun (x) x").unwrap(), "[function]");
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    // `y` is unbound, but the trailing `)` is found first.
    let error = evaluate("y )").unwrap_err();
    assert!(error.is_syntax());
    assert_eq!(error.message(), "expected end of input, found `)`");
}

#[test]
fn evaluation_errors_carry_the_span() {
    let error = evaluate("1 + y").unwrap_err();
    assert!(matches!(error, MsdError::Evaluation(_)));
    assert_eq!(error.message(), "free variable: `y` is not bound");
    assert_eq!(error.span().map(|span| span.to_range()), Some(4..5));
}

#[test]
fn format_is_pretty() {
    assert_eq!(format("(1+2)*3").unwrap(), "(1 + 2) * 3");
    assert_eq!(
        format("_let x=1 _in x").unwrap(),
        "_let x = 1\n_in x"
    );
}

#[test]
fn format_inline_is_parenthesized() {
    assert_eq!(format_inline("1+2*3").unwrap(), "(1+(2*3))");
    assert_eq!(format_inline("f(2)").unwrap(), "f(2)");
}

#[test]
fn format_does_not_evaluate() {
    assert_eq!(format("1 + _true").unwrap(), "1 + _true");
}
