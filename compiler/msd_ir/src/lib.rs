//! msdscript IR - the representation shared by every front-end stage.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`Token`] / [`TokenKind`] / [`TokenList`]: lexer output
//! - [`Expr`] / [`ExprKind`] / [`ExprArena`]: the expression tree, stored flat
//! - [`Prec`]: printing precedence levels
//!
//! # Design
//!
//! Expressions never own their children. Every child reference is an
//! [`ExprId`] into the [`ExprArena`] that the parser fills, so a whole program
//! is one contiguous allocation that is dropped in one piece. Once parsing
//! finishes the arena is frozen and handed around as a [`SharedArena`];
//! closures created by the interpreter keep that handle alive, which is what
//! lets a function value outlive the evaluation step that produced it.

mod arena;
mod expr;
mod interner;
mod prec;
mod span;
mod token;

pub use arena::{ExprArena, ExprId, SharedArena};
pub use expr::{Expr, ExprKind};
pub use interner::{Name, StringInterner};
pub use prec::Prec;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
