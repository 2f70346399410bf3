//! Token cursor for navigating the token stream.

use msd_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Position in a [`TokenList`].
///
/// Never moves past the final `Eof`, so [`Cursor::current`] is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token, `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token is exactly `kind`.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = ?token.kind, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume `kind` or fail naming it as the expected token.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unexpected(
                self.current(),
                kind.describe(),
                self.interner,
            ))
        }
    }

    /// Consume a closing `)` matching the `(` at `open`.
    pub fn expect_close(&mut self, open: Span) -> Result<Span, ParseError> {
        if self.check(TokenKind::RParen) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unclosed(open, self.current(), self.interner))
        }
    }
}
