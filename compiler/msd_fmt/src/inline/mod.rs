//! Compact single-line rendering.
//!
//! Every compound node carries its own parentheses, so the output reads back
//! as the same tree without any precedence reasoning:
//!
//! ```text
//! (_let f=(_fun (x) (x+1)) _in f(2))
//! ```

use msd_ir::{ExprArena, ExprId, ExprKind, StringInterner};
use msd_stack::ensure_sufficient_stack;

struct InlinePrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: String,
}

impl InlinePrinter<'_> {
    fn print(&mut self, expr_id: ExprId) {
        ensure_sufficient_stack(|| self.print_inner(expr_id));
    }

    fn print_inner(&mut self, expr_id: ExprId) {
        match *self.arena.kind(expr_id) {
            ExprKind::Num(n) => self.out.push_str(&n.to_string()),
            ExprKind::Bool(true) => self.out.push_str("_true"),
            ExprKind::Bool(false) => self.out.push_str("_false"),
            ExprKind::Var(name) => self.out.push_str(self.interner.lookup(name)),
            ExprKind::Add { left, right } => self.binary(left, "+", right),
            ExprKind::Mult { left, right } => self.binary(left, "*", right),
            ExprKind::Equal { left, right } => self.binary(left, "==", right),
            ExprKind::Let { name, value, body } => {
                self.out.push_str("(_let ");
                self.out.push_str(self.interner.lookup(name));
                self.out.push('=');
                self.print(value);
                self.out.push_str(" _in ");
                self.print(body);
                self.out.push(')');
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("(_if ");
                self.print(cond);
                self.out.push_str(" _then ");
                self.print(then_branch);
                self.out.push_str(" _else ");
                self.print(else_branch);
                self.out.push(')');
            }
            ExprKind::Fun { param, body } => {
                self.out.push_str("(_fun (");
                self.out.push_str(self.interner.lookup(param));
                self.out.push_str(") ");
                self.print(body);
                self.out.push(')');
            }
            ExprKind::Call { callee, arg } => {
                self.print(callee);
                self.out.push('(');
                self.print(arg);
                self.out.push(')');
            }
        }
    }

    fn binary(&mut self, left: ExprId, op: &str, right: ExprId) {
        self.out.push('(');
        self.print(left);
        self.out.push_str(op);
        self.print(right);
        self.out.push(')');
    }
}

/// Render the tree rooted at `expr_id` on one line, fully parenthesized.
pub fn inline_expr(arena: &ExprArena, interner: &StringInterner, expr_id: ExprId) -> String {
    let mut printer = InlinePrinter {
        arena,
        interner,
        out: String::new(),
    };
    printer.print(expr_id);
    printer.out
}
