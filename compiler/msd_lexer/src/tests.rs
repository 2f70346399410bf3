#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let mut interner = StringInterner::new();
    let tokens = lex(source, &mut interner);
    (tokens.kinds(), interner)
}

#[test]
fn empty_source_is_just_eof() {
    let (kinds, _) = kinds("   \n\t ");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn punctuation() {
    let (kinds, _) = kinds("( ) + * == =");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn triple_equals_is_eqeq_then_eq() {
    let (kinds, _) = kinds("===");
    assert_eq!(kinds, vec![TokenKind::EqEq, TokenKind::Eq, TokenKind::Eof]);
}

#[test]
fn numbers_carry_their_sign() {
    let (kinds, _) = kinds("42 -7 1 -2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(42),
            TokenKind::Int(-7),
            TokenKind::Int(1),
            TokenKind::Int(-2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn extreme_numbers() {
    let (kinds, _) = kinds("9223372036854775807 -9223372036854775808");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(i64::MAX),
            TokenKind::Int(i64::MIN),
            TokenKind::Eof
        ]
    );
}

#[test]
fn out_of_range_number() {
    let (kinds, _) = kinds("9223372036854775808");
    assert_eq!(kinds, vec![TokenKind::IntOverflow, TokenKind::Eof]);
}

#[test]
fn lone_minus() {
    let (kinds, _) = kinds("- 5");
    assert_eq!(
        kinds,
        vec![TokenKind::Minus, TokenKind::Int(5), TokenKind::Eof]
    );
}

#[test]
fn keywords() {
    let (kinds, _) = kinds("_true _false _let _in _if _then _else _fun");
    assert_eq!(
        kinds,
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Let,
            TokenKind::In,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Fun,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unknown_keyword_is_interned() {
    let (kinds, interner) = kinds("_loop");
    let name = interner.get("_loop").unwrap();
    assert_eq!(kinds, vec![TokenKind::UnknownKeyword(name), TokenKind::Eof]);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    let (kinds, interner) = kinds("fact_2 x");
    let fact = interner.get("fact_2").unwrap();
    let x = interner.get("x").unwrap();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident(fact), TokenKind::Ident(x), TokenKind::Eof]
    );
}

#[test]
fn keyword_directly_after_number() {
    let (kinds, _) = kinds("1_in");
    assert_eq!(kinds, vec![TokenKind::Int(1), TokenKind::In, TokenKind::Eof]);
}

#[test]
fn invalid_character_becomes_error_token() {
    let (kinds, _) = kinds("1 $ 2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(1),
            TokenKind::Error,
            TokenKind::Int(2),
            TokenKind::Eof
        ]
    );
}

#[test]
fn spans_are_byte_ranges() {
    let mut interner = StringInterner::new();
    let tokens = lex("_let xy = -3", &mut interner);
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 4),
            Span::new(5, 7),
            Span::new(8, 9),
            Span::new(10, 12),
            Span::new(12, 12),
        ]
    );
}

#[test]
fn same_identifier_interns_once() {
    let mut interner = StringInterner::new();
    let tokens = lex("x x x", &mut interner);
    assert_eq!(interner.len(), 1);
    assert_eq!(tokens.len(), 4);
}
