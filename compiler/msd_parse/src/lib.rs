//! Recursive descent parser for msdscript.
//!
//! Produces a flat AST in an [`ExprArena`]. Grammar, loosest first:
//!
//! ```text
//! expr        := comparison
//! comparison  := addend ( "==" comparison )?
//! addend      := multend ( "+" multend )*
//! multend     := multicand ( "*" multicand )*
//! multicand   := primary ( "(" expr? ")" )*
//! primary     := "(" expr ")" | number | identifier
//!              | "_true" | "_false"
//!              | "_let" identifier "=" expr "_in" expr
//!              | "_if" expr "_then" expr "_else" expr
//!              | "_fun" "(" identifier ")" expr
//! ```
//!
//! `f()` is a call with the argument `0`. The whole input must be consumed.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use msd_ir::{Expr, ExprArena, ExprId, ExprKind, Span, StringInterner, TokenKind, TokenList};
use tracing::debug;

/// A successfully parsed program.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len() * 3),
        }
    }

    /// Parse one expression that spans the whole token list.
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let root = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::unexpected(
                self.cursor.current(),
                TokenKind::Eof.describe(),
                self.cursor.interner(),
            ));
        }
        Ok(ParseOutput {
            arena: self.arena,
            root,
        })
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get(id).span
    }
}

/// Parse a lexed program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let output = Parser::new(tokens, interner).parse_program()?;
    debug!(nodes = output.arena.len(), "parsed");
    Ok(output)
}

/// Lex and parse `source`.
pub fn parse_source(source: &str, interner: &mut StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = msd_lexer::lex(source, interner);
    parse(&tokens, interner)
}
