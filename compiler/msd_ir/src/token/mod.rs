//! Tokens produced by the lexer.
//!
//! Malformed input does not stop the lexer. It produces error-carrying
//! kinds (`Minus`, `IntOverflow`, `UnknownKeyword`, `Error`) and leaves it to
//! the parser to reject them with a message naming what it expected there.

use crate::{Name, Span};

/// Token variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal, sign included: `42`, `-7`.
    Int(i64),
    /// Identifier: `x`, `fact_2`.
    Ident(Name),

    // Keywords
    True,
    False,
    Let,
    In,
    If,
    Then,
    Else,
    Fun,

    // Punctuation
    LParen,
    RParen,
    Plus,
    Star,
    EqEq,
    Eq,

    // Error-carrying kinds
    /// A `-` with no digits after it.
    Minus,
    /// Digits that do not fit in an `i64`.
    IntOverflow,
    /// `_` followed by a word that is not a keyword.
    UnknownKeyword(Name),
    /// A character that starts no token.
    Error,

    Eof,
}

/// Keyword spellings and their kinds.
const KEYWORDS: [(&str, TokenKind); 8] = [
    ("_true", TokenKind::True),
    ("_false", TokenKind::False),
    ("_let", TokenKind::Let),
    ("_in", TokenKind::In),
    ("_if", TokenKind::If),
    ("_then", TokenKind::Then),
    ("_else", TokenKind::Else),
    ("_fun", TokenKind::Fun),
];

impl TokenKind {
    /// Classify an underscore word such as `_let`.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|(_, kind)| *kind)
    }

    /// Spelling of a keyword kind, `None` for everything else.
    pub fn keyword_str(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(spelling, _)| *spelling)
    }

    /// Short description used in "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Int(_) => "a number",
            TokenKind::Ident(_) => "an identifier",
            TokenKind::True => "`_true`",
            TokenKind::False => "`_false`",
            TokenKind::Let => "`_let`",
            TokenKind::In => "`_in`",
            TokenKind::If => "`_if`",
            TokenKind::Then => "`_then`",
            TokenKind::Else => "`_else`",
            TokenKind::Fun => "`_fun`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Plus => "`+`",
            TokenKind::Star => "`*`",
            TokenKind::EqEq => "`==`",
            TokenKind::Eq => "`=`",
            TokenKind::Minus => "`-`",
            TokenKind::IntOverflow => "an out-of-range number",
            TokenKind::UnknownKeyword(_) => "an unknown keyword",
            TokenKind::Error => "an unrecognized character",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always terminated by exactly one `Eof` token once built
/// through [`TokenList::finish`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Append the terminating `Eof` at `offset`.
    pub fn finish(&mut self, offset: u32) {
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::point(offset)));
    }

    /// Token at `index`, or the final `Eof` when past the end.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty (it was never finished).
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> &Token {
        match self.tokens.get(index) {
            Some(token) => token,
            None => &self.tokens[self.tokens.len() - 1],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, `Eof` included.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
