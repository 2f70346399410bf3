//! Precedence levels used when printing expressions.

/// Binding strength of the context an expression is printed in, weakest
/// first. `Prec::None` is the top level, a `_let` body, a call argument
/// and every other position delimited by keywords or parentheses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Prec {
    None,
    Equal,
    Add,
    Mult,
}
