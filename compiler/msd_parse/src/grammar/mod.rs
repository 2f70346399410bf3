//! Grammar productions, one method per rule.

use msd_ir::{ExprId, ExprKind, Name, TokenKind};
use msd_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

type ParseResult = Result<ExprId, ParseError>;

impl Parser<'_> {
    /// `expr := comparison`
    pub(crate) fn parse_expr(&mut self) -> ParseResult {
        ensure_sufficient_stack(|| self.parse_comparison())
    }

    /// `comparison := addend ( "==" comparison )?`
    ///
    /// Right-recursive: `a == b == c` is `a == (b == c)`.
    fn parse_comparison(&mut self) -> ParseResult {
        let left = self.parse_addend()?;
        if !self.cursor.check(TokenKind::EqEq) {
            return Ok(left);
        }
        self.cursor.advance();
        let right = ensure_sufficient_stack(|| self.parse_comparison())?;
        let span = self.span_of(left).merge(self.span_of(right));
        Ok(self.alloc(ExprKind::Equal { left, right }, span))
    }

    /// `addend := multend ( "+" multend )*`
    fn parse_addend(&mut self) -> ParseResult {
        let mut left = self.parse_multend()?;
        while self.cursor.check(TokenKind::Plus) {
            self.cursor.advance();
            let right = self.parse_multend()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Add { left, right }, span);
        }
        Ok(left)
    }

    /// `multend := multicand ( "*" multicand )*`
    fn parse_multend(&mut self) -> ParseResult {
        let mut left = self.parse_multicand()?;
        while self.cursor.check(TokenKind::Star) {
            self.cursor.advance();
            let right = self.parse_multicand()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Mult { left, right }, span);
        }
        Ok(left)
    }

    /// `multicand := primary ( "(" expr? ")" )*`
    fn parse_multicand(&mut self) -> ParseResult {
        let mut callee = self.parse_primary()?;
        while self.cursor.check(TokenKind::LParen) {
            let open = self.cursor.advance().span;
            let arg = if self.cursor.check(TokenKind::RParen) {
                let close = self.cursor.current_span();
                trace!("empty call parens, argument defaults to 0");
                self.alloc(ExprKind::Num(0), open.merge(close))
            } else {
                self.parse_expr()?
            };
            let close = self.cursor.expect_close(open)?;
            let span = self.span_of(callee).merge(close);
            callee = self.alloc(ExprKind::Call { callee, arg }, span);
        }
        Ok(callee)
    }

    fn parse_primary(&mut self) -> ParseResult {
        let token = self.cursor.current();
        trace!(kind = ?token.kind, "parse_primary");
        match token.kind {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Num(n), token.span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Var(name), token.span))
            }
            TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                let value = token.kind == TokenKind::True;
                Ok(self.alloc(ExprKind::Bool(value), token.span))
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let inner = self.parse_expr()?;
                self.cursor.expect_close(open)?;
                Ok(inner)
            }
            TokenKind::Let => self.parse_let(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fun => self.parse_fun(),
            _ => Err(ParseError::unexpected(
                token,
                "an expression",
                self.cursor.interner(),
            )),
        }
    }

    /// `"_let" identifier "=" expr "_in" expr`
    fn parse_let(&mut self) -> ParseResult {
        let start = self.cursor.advance().span;
        let name = self.parse_ident()?;
        self.cursor.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::In)?;
        let body = self.parse_expr()?;
        let span = start.merge(self.span_of(body));
        Ok(self.alloc(ExprKind::Let { name, value, body }, span))
    }

    /// `"_if" expr "_then" expr "_else" expr`
    fn parse_if(&mut self) -> ParseResult {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.cursor.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;
        let span = start.merge(self.span_of(else_branch));
        Ok(self.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `"_fun" "(" identifier ")" expr`
    fn parse_fun(&mut self) -> ParseResult {
        let start = self.cursor.advance().span;
        let open = self.cursor.expect(TokenKind::LParen)?;
        let param = self.parse_ident()?;
        self.cursor.expect_close(open)?;
        let body = self.parse_expr()?;
        let span = start.merge(self.span_of(body));
        Ok(self.alloc(ExprKind::Fun { param, body }, span))
    }

    fn parse_ident(&mut self) -> Result<Name, ParseError> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = token.kind {
            self.cursor.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected(
                token,
                "an identifier",
                self.cursor.interner(),
            ))
        }
    }
}
