//! Formatter Core
//!
//! Top-down rendering that threads a context precedence through every call
//! and reads the output column from [`FormatContext`] wherever a layout has
//! to line up with something printed earlier on the line.
//!
//! # Parenthesization
//!
//! | node    | parenthesized when context is | operands printed at      |
//! |---------|-------------------------------|--------------------------|
//! | `+`     | `Add` or tighter              | left `Add`, right `None` |
//! | `*`     | `Mult`                        | both `Mult`              |
//! | `==`    | anything but `None`           | both `Add`               |
//! | `_let`, `_if`, `_fun` | anything but `None` | parts at `None`     |
//! | call    | never                         | callee `Mult`, arg `None`|
//!
//! An `Add` whose right operand is another `Add` or an `==` prints without
//! parentheses and so does not read back as the same tree.
//!
//! # Layout
//!
//! ```text
//! _let x = 5
//! _in _if x == 5
//!       _then _fun (y)
//!               _if y == 0
//!                 _then 1
//!                 _else y
//!       _else 0
//! ```
//!
//! `_in` lines up with its `_let`; `_then`/`_else` sit `indent_width` past
//! their `_if`; a function body that is not a number, sum, product or call
//! goes on its own line `indent_width` past the `_fun`.

use msd_ir::{ExprArena, ExprId, ExprKind, Name, Prec, StringInterner};
use msd_stack::ensure_sufficient_stack;

use crate::context::{FormatConfig, FormatContext};
use crate::emitter::StringEmitter;

/// Pretty-printer over one arena.
pub struct Formatter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    ctx: FormatContext<StringEmitter>,
}

impl<'a> Formatter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Self::with_config(arena, interner, FormatConfig::default())
    }

    pub fn with_config(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        config: FormatConfig,
    ) -> Self {
        Self {
            arena,
            interner,
            ctx: FormatContext::with_config(config),
        }
    }

    /// Format an expression at the top level and return the output.
    pub fn format_expr(mut self, expr_id: ExprId) -> String {
        self.format(expr_id, Prec::None);
        self.ctx.finalize()
    }

    /// Format `expr_id` as it appears in a context of precedence `prec`.
    pub fn format(&mut self, expr_id: ExprId, prec: Prec) {
        ensure_sufficient_stack(|| self.format_inner(expr_id, prec));
    }

    fn format_inner(&mut self, expr_id: ExprId, prec: Prec) {
        match *self.arena.kind(expr_id) {
            ExprKind::Num(n) => self.ctx.emit(&n.to_string()),
            ExprKind::Bool(true) => self.ctx.emit("_true"),
            ExprKind::Bool(false) => self.ctx.emit("_false"),
            ExprKind::Var(name) => self.emit_name(name),
            ExprKind::Add { left, right } => {
                self.binary(prec >= Prec::Add, left, Prec::Add, " + ", right, Prec::None);
            }
            ExprKind::Mult { left, right } => {
                self.binary(prec >= Prec::Mult, left, Prec::Mult, " * ", right, Prec::Mult);
            }
            ExprKind::Equal { left, right } => {
                self.binary(prec > Prec::None, left, Prec::Add, " == ", right, Prec::Add);
            }
            ExprKind::Let { name, value, body } => {
                self.wrap(prec != Prec::None, |this| this.format_let(name, value, body));
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.wrap(prec != Prec::None, |this| {
                    this.format_if(cond, then_branch, else_branch);
                });
            }
            ExprKind::Fun { param, body } => {
                self.wrap(prec != Prec::None, |this| this.format_fun(param, body));
            }
            ExprKind::Call { callee, arg } => {
                self.format(callee, Prec::Mult);
                self.ctx.emit("(");
                self.format(arg, Prec::None);
                self.ctx.emit(")");
            }
        }
    }

    fn binary(
        &mut self,
        parens: bool,
        left: ExprId,
        left_prec: Prec,
        op: &str,
        right: ExprId,
        right_prec: Prec,
    ) {
        self.wrap(parens, |this| {
            this.format(left, left_prec);
            this.ctx.emit(op);
            this.format(right, right_prec);
        });
    }

    /// Run `f`, surrounded by parentheses if `parens`. The `(` is emitted
    /// first, so a layout inside starts its column count after it.
    fn wrap(&mut self, parens: bool, f: impl FnOnce(&mut Self)) {
        if parens {
            self.ctx.emit("(");
        }
        f(self);
        if parens {
            self.ctx.emit(")");
        }
    }

    fn format_let(&mut self, name: Name, value: ExprId, body: ExprId) {
        let start = self.ctx.column();
        self.ctx.emit("_let ");
        self.emit_name(name);
        self.ctx.emit(" = ");
        self.format(value, Prec::None);
        self.ctx.newline_to(start);
        self.ctx.emit("_in ");
        self.format(body, Prec::None);
    }

    fn format_if(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) {
        let start = self.ctx.column();
        let branch_column = start + self.ctx.config().indent_width;
        self.ctx.emit("_if ");
        self.format(cond, Prec::None);
        self.ctx.newline_to(branch_column);
        self.ctx.emit("_then ");
        self.format(then_branch, Prec::None);
        self.ctx.newline_to(branch_column);
        self.ctx.emit("_else ");
        self.format(else_branch, Prec::None);
    }

    fn format_fun(&mut self, param: Name, body: ExprId) {
        let start = self.ctx.column();
        self.ctx.emit("_fun (");
        self.emit_name(param);
        self.ctx.emit(")");
        if self.arena.kind(body).is_simple() {
            self.ctx.emit_space();
        } else {
            let body_column = start + self.ctx.config().indent_width;
            self.ctx.newline_to(body_column);
        }
        self.format(body, Prec::None);
    }

    fn emit_name(&mut self, name: Name) {
        self.ctx.emit(self.interner.lookup(name));
    }
}

/// Pretty-print the tree rooted at `expr_id` with the default config.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, expr_id: ExprId) -> String {
    Formatter::new(arena, interner).format_expr(expr_id)
}
