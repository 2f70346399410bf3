//! Runtime values.

use std::fmt;

use msd_ir::{Expr, ExprArena, ExprId, ExprKind, Name, SharedArena, Span};

use crate::errors::{expected_boolean, integer_overflow, non_numeric_operand};
use crate::{Environment, EvalError, EvalResult};

/// Result of evaluating an expression.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Function(FunctionValue),
}

/// A closure: parameter, body and the environment it was created in.
///
/// `body` indexes into `arena`, which the closure keeps alive.
#[derive(Clone)]
pub struct FunctionValue {
    pub param: Name,
    pub body: ExprId,
    pub env: Environment,
    pub arena: SharedArena,
}

impl FunctionValue {
    /// Same parameter, structurally equal body and the very same captured
    /// environment.
    pub fn same_closure(&self, other: &FunctionValue) -> bool {
        self.param == other.param
            && self.env.ptr_eq(&other.env)
            && self
                .arena
                .structurally_eq(self.body, &other.arena, other.body)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("param", &self.param)
            .field("body", &self.body)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// Checked `self + other`. Both must be numbers.
    pub fn add(&self, other: &Value) -> EvalResult {
        let (a, b) = self.int_operands(other, "addition")?;
        a.checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("addition"))
    }

    /// Checked `self * other`. Both must be numbers.
    ///
    /// `checked_mul` detects overflow without producing a wrapped product,
    /// so `MIN * -1` and `MIN * MIN` fail while `x * 0` is always `0`.
    pub fn multiply(&self, other: &Value) -> EvalResult {
        let (a, b) = self.int_operands(other, "multiplication")?;
        a.checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("multiplication"))
    }

    fn int_operands(&self, other: &Value, operation: &'static str) -> Result<(i64, i64), EvalError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok((*a, *b)),
            (Value::Int(_), non_number) | (non_number, _) => {
                Err(non_numeric_operand(operation, non_number.type_name()))
            }
        }
    }

    /// `==` semantics. Values of different kinds are unequal, never an error.
    pub fn value_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same_closure(b),
            _ => false,
        }
    }

    /// The boolean itself; anything else is a type error.
    pub fn is_truthy(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(expected_boolean(other.type_name())),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Function(_) => "function",
        }
    }

    /// Rebuild source for this value in `arena`.
    ///
    /// A function becomes its `_fun` expression; the captured environment is
    /// lost. Nodes get `Span::DUMMY`.
    pub fn to_expr(&self, arena: &mut ExprArena) -> ExprId {
        let kind = match self {
            Value::Int(n) => ExprKind::Num(*n),
            Value::Bool(b) => ExprKind::Bool(*b),
            Value::Function(func) => ExprKind::Fun {
                param: func.param,
                body: arena.copy_from(&func.arena, func.body),
            },
        };
        arena.alloc(Expr::new(kind, Span::DUMMY))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.value_equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(true) => f.write_str("_true"),
            Value::Bool(false) => f.write_str("_false"),
            Value::Function(_) => f.write_str("[function]"),
        }
    }
}
