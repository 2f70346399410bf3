//! Expression nodes.

use crate::{ExprId, Name, Span};

/// Expression node: a variant plus the source it was parsed from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants. Children are arena indices, never boxes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Integer literal.
    Num(i64),
    /// `_true` / `_false`.
    Bool(bool),
    /// Variable reference.
    Var(Name),

    /// `left + right`
    Add { left: ExprId, right: ExprId },
    /// `left * right`
    Mult { left: ExprId, right: ExprId },
    /// `left == right`
    Equal { left: ExprId, right: ExprId },

    /// `_if cond _then then_branch _else else_branch`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// `_let name = value _in body`; `value` does not see `name`.
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },
    /// `_fun (param) body`; multi-argument functions nest.
    Fun { param: Name, body: ExprId },
    /// `callee(arg)`
    Call { callee: ExprId, arg: ExprId },
}

impl ExprKind {
    /// Forms a function body can follow `_fun (x)` on the same line.
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            ExprKind::Num(_) | ExprKind::Add { .. } | ExprKind::Mult { .. } | ExprKind::Call { .. }
        )
    }
}
