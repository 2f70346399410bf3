//! Parse errors.

use msd_ir::{Span, StringInterner, Token, TokenKind};
use thiserror::Error;

/// A syntax error. Parsing stops at the first one.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The offending token.
    pub span: Span,
}

/// What went wrong. Every kind names what the parser expected at the
/// position it failed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed number: `-` must be followed by digits (expected {expected})")]
    MalformedNumber { expected: &'static str },

    #[error("number literal does not fit in a 64-bit signed integer")]
    IntegerOverflow,

    #[error("unknown keyword `{keyword}` (expected {expected})")]
    UnknownKeyword {
        keyword: String,
        expected: &'static str,
    },

    #[error("unclosed parenthesis: expected `)`, found {found}")]
    UnclosedParen {
        /// The `(` left open.
        open: Span,
        found: &'static str,
    },

    #[error("invalid character (expected {expected})")]
    InvalidCharacter { expected: &'static str },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Error for `found` appearing where `expected` was required.
    ///
    /// Error-carrying tokens report their own problem instead of a generic
    /// "found X" so a stray `-` reads as a malformed number wherever it is.
    pub fn unexpected(found: &Token, expected: &'static str, interner: &StringInterner) -> Self {
        let kind = match found.kind {
            TokenKind::Minus => ParseErrorKind::MalformedNumber { expected },
            TokenKind::IntOverflow => ParseErrorKind::IntegerOverflow,
            TokenKind::UnknownKeyword(name) => ParseErrorKind::UnknownKeyword {
                keyword: interner.lookup(name).to_owned(),
                expected,
            },
            TokenKind::Error => ParseErrorKind::InvalidCharacter { expected },
            other => ParseErrorKind::UnexpectedToken {
                expected,
                found: other.describe(),
            },
        };
        ParseError::new(kind, found.span)
    }

    /// Error for a `(` opened at `open` whose `)` never came.
    pub fn unclosed(open: Span, found: &Token, interner: &StringInterner) -> Self {
        if is_error_token(found.kind) {
            return ParseError::unexpected(found, TokenKind::RParen.describe(), interner);
        }
        ParseError::new(
            ParseErrorKind::UnclosedParen {
                open,
                found: found.kind.describe(),
            },
            found.span,
        )
    }

    /// Secondary location worth pointing at, if any.
    pub fn related_span(&self) -> Option<Span> {
        match self.kind {
            ParseErrorKind::UnclosedParen { open, .. } => Some(open),
            _ => None,
        }
    }
}

fn is_error_token(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Minus | TokenKind::IntOverflow | TokenKind::UnknownKeyword(_) | TokenKind::Error
    )
}
