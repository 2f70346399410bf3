//! Lexer for msdscript using logos with string interning.
//!
//! The lexer never fails. Malformed input becomes an error-carrying token
//! (`Minus`, `IntOverflow`, `UnknownKeyword`, `Error`) so the parser can
//! report it together with what it expected at that position.

use logos::Logos;
use msd_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Optional sign and digits. Range is checked when cooking.
    #[regex(r"-?[0-9]+")]
    Number,

    /// `_` and a word; classified against the keyword table when cooking.
    #[regex(r"_[A-Za-z]*")]
    Underscore,

    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
}

/// Tokenize `source`, interning identifiers and unknown keywords.
///
/// The returned list always ends with `Eof`.
pub fn lex(source: &str, interner: &mut StringInterner) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => cook(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    result.finish(u32::try_from(source.len()).unwrap_or(u32::MAX));
    result
}

/// Turn a raw token and its text into a [`TokenKind`].
fn cook(raw: RawToken, slice: &str, interner: &mut StringInterner) -> TokenKind {
    match raw {
        RawToken::Number => match slice.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => TokenKind::IntOverflow,
        },
        RawToken::Underscore => TokenKind::keyword(slice)
            .unwrap_or_else(|| TokenKind::UnknownKeyword(interner.intern(slice))),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Star => TokenKind::Star,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Minus => TokenKind::Minus,
    }
}

#[cfg(test)]
mod tests;
