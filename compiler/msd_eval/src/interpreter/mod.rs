//! Tree-walking interpreter.
//!
//! # Arena threading
//!
//! A closure's body is an `ExprId` into the arena the closure was created
//! from, carried in [`FunctionValue::arena`]. A call swaps that arena in for
//! the duration of the body and restores the caller's afterwards, so a
//! function value stays callable even when it reaches an interpreter working
//! on a different program.

use msd_ir::{ExprId, ExprKind, SharedArena, Span, StringInterner};
use msd_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{call_depth_exceeded, condition_not_boolean, not_callable, unbound_variable};
use crate::{Environment, EvalResult, FunctionValue, Value};

/// Interpreter limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Calls that may be in progress at once.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: 10_000,
        }
    }
}

/// Evaluates expressions of one program.
pub struct Interpreter<'a> {
    arena: SharedArena,
    interner: &'a StringInterner,
    config: EvalConfig,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &SharedArena, interner: &'a StringInterner) -> Self {
        Interpreter {
            arena: arena.clone(),
            interner,
            config: EvalConfig::default(),
            call_depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate a whole program in the empty environment.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_root(&mut self, root: ExprId) -> EvalResult {
        let value = self.eval(root, &Environment::empty())?;
        debug!(result = %value, "evaluated");
        Ok(value)
    }

    /// Evaluate `id` in `env`.
    pub fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        let expr = *self.arena.get(id);
        match expr.kind {
            ExprKind::Num(n) => Ok(Value::Int(n)),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Var(name) => env
                .lookup(name)
                .ok_or_else(|| unbound_variable(self.interner.lookup(name)).with_span(expr.span)),
            ExprKind::Add { left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                left.add(&right).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Mult { left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                left.multiply(&right).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Equal { left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Ok(Value::Bool(left.value_equals(&right)))
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let value = self.eval(cond, env)?;
                let taken = value.is_truthy().map_err(|_| {
                    condition_not_boolean(value.type_name()).with_span(self.arena.get(cond).span)
                })?;
                self.eval(if taken { then_branch } else { else_branch }, env)
            }
            ExprKind::Let { name, value, body } => {
                let value = self.eval(value, env)?;
                self.eval(body, &env.extend(name, value))
            }
            ExprKind::Fun { param, body } => Ok(Value::Function(FunctionValue {
                param,
                body,
                env: env.clone(),
                arena: self.arena.clone(),
            })),
            ExprKind::Call { callee, arg } => self.eval_call(callee, arg, expr.span, env),
        }
    }

    /// Evaluate callee then argument in the caller's environment, then the
    /// body in the closure's environment extended with the parameter.
    fn eval_call(&mut self, callee: ExprId, arg: ExprId, span: Span, env: &Environment) -> EvalResult {
        let func = match self.eval(callee, env)? {
            Value::Function(func) => func,
            other => {
                return Err(not_callable(other.type_name()).with_span(self.arena.get(callee).span))
            }
        };
        let arg = self.eval(arg, env)?;

        if self.call_depth >= self.config.max_call_depth {
            return Err(call_depth_exceeded(self.config.max_call_depth).with_span(span));
        }
        self.call_depth += 1;
        trace!(
            param = self.interner.lookup(func.param),
            depth = self.call_depth,
            "call"
        );

        let frame = func.env.extend(func.param, arg);
        let result = if func.arena.ptr_eq(&self.arena) {
            self.eval(func.body, &frame)
        } else {
            let caller_arena = std::mem::replace(&mut self.arena, func.arena.clone());
            let result = self.eval(func.body, &frame);
            self.arena = caller_arena;
            result
        };

        self.call_depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests;
