//! Arena storage for the flat expression tree.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use msd_stack::ensure_sufficient_stack;

use crate::{Expr, ExprKind};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Contiguous, append-only storage for every expression of one program.
///
/// Children are always allocated before their parent, so a parent's
/// `ExprId` is greater than those of all its descendants.
#[derive(Clone, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a source of `source_len` bytes (roughly one node per
    /// three bytes of dense source).
    pub fn with_capacity(source_len: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(source_len / 3),
        }
    }

    /// Store `expr` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` expressions.
    #[inline]
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(expr);
        ExprId(index)
    }

    /// Get an expression by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Structural equality of `a` in this arena and `b` in `other`.
    ///
    /// Same variant, same literal values and names, recursively equal
    /// children. Spans are ignored. Names are compared by identity, so both
    /// arenas must come from the same interner.
    pub fn structurally_eq(&self, a: ExprId, other: &ExprArena, b: ExprId) -> bool {
        ensure_sufficient_stack(|| match (self.kind(a), other.kind(b)) {
            (ExprKind::Num(x), ExprKind::Num(y)) => x == y,
            (ExprKind::Bool(x), ExprKind::Bool(y)) => x == y,
            (ExprKind::Var(x), ExprKind::Var(y)) => x == y,
            (
                ExprKind::Add { left: l1, right: r1 },
                ExprKind::Add { left: l2, right: r2 },
            )
            | (
                ExprKind::Mult { left: l1, right: r1 },
                ExprKind::Mult { left: l2, right: r2 },
            )
            | (
                ExprKind::Equal { left: l1, right: r1 },
                ExprKind::Equal { left: l2, right: r2 },
            )
            | (
                ExprKind::Call {
                    callee: l1,
                    arg: r1,
                },
                ExprKind::Call {
                    callee: l2,
                    arg: r2,
                },
            ) => self.structurally_eq(*l1, other, *l2) && self.structurally_eq(*r1, other, *r2),
            (
                ExprKind::If {
                    cond: c1,
                    then_branch: t1,
                    else_branch: e1,
                },
                ExprKind::If {
                    cond: c2,
                    then_branch: t2,
                    else_branch: e2,
                },
            ) => {
                self.structurally_eq(*c1, other, *c2)
                    && self.structurally_eq(*t1, other, *t2)
                    && self.structurally_eq(*e1, other, *e2)
            }
            (
                ExprKind::Let {
                    name: n1,
                    value: v1,
                    body: b1,
                },
                ExprKind::Let {
                    name: n2,
                    value: v2,
                    body: b2,
                },
            ) => {
                n1 == n2
                    && self.structurally_eq(*v1, other, *v2)
                    && self.structurally_eq(*b1, other, *b2)
            }
            (
                ExprKind::Fun {
                    param: p1,
                    body: b1,
                },
                ExprKind::Fun {
                    param: p2,
                    body: b2,
                },
            ) => p1 == p2 && self.structurally_eq(*b1, other, *b2),
            _ => false,
        })
    }

    /// Deep-copy the subtree rooted at `id` in `source` into this arena.
    pub fn copy_from(&mut self, source: &ExprArena, id: ExprId) -> ExprId {
        ensure_sufficient_stack(|| {
            let expr = source.get(id);
            let kind = match expr.kind {
                ExprKind::Num(n) => ExprKind::Num(n),
                ExprKind::Bool(b) => ExprKind::Bool(b),
                ExprKind::Var(name) => ExprKind::Var(name),
                ExprKind::Add { left, right } => ExprKind::Add {
                    left: self.copy_from(source, left),
                    right: self.copy_from(source, right),
                },
                ExprKind::Mult { left, right } => ExprKind::Mult {
                    left: self.copy_from(source, left),
                    right: self.copy_from(source, right),
                },
                ExprKind::Equal { left, right } => ExprKind::Equal {
                    left: self.copy_from(source, left),
                    right: self.copy_from(source, right),
                },
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                } => ExprKind::If {
                    cond: self.copy_from(source, cond),
                    then_branch: self.copy_from(source, then_branch),
                    else_branch: self.copy_from(source, else_branch),
                },
                ExprKind::Let { name, value, body } => ExprKind::Let {
                    name,
                    value: self.copy_from(source, value),
                    body: self.copy_from(source, body),
                },
                ExprKind::Fun { param, body } => ExprKind::Fun {
                    param,
                    body: self.copy_from(source, body),
                },
                ExprKind::Call { callee, arg } => ExprKind::Call {
                    callee: self.copy_from(source, callee),
                    arg: self.copy_from(source, arg),
                },
            };
            self.alloc(Expr::new(kind, expr.span))
        })
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("len", &self.exprs.len())
            .finish()
    }
}

/// Read-only, reference-counted handle to a finished arena.
///
/// The interpreter is single-threaded, so this is an `Rc`. Closures hold a
/// clone, keeping the arena alive for as long as any function value needs
/// its body.
#[derive(Clone, Debug)]
pub struct SharedArena(Rc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Rc::new(arena))
    }

    /// Whether both handles point at the same arena.
    #[inline]
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    #[inline]
    fn deref(&self) -> &ExprArena {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}
