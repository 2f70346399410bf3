//! Stack safety for deep recursion.
//!
//! The parser, the interpreter and the pretty-printer all recurse once per
//! level of expression nesting (and the interpreter once more per function
//! call). A source such as two hundred thousand nested parentheses would
//! overflow a fixed native stack long before any of them finished, so every
//! recursive entry point funnels through [`ensure_sufficient_stack`], which
//! grows the stack on the heap when the remaining space runs low.
//!
//! On `wasm32` the helper is a plain passthrough.

/// Grow once less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```text
/// fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
