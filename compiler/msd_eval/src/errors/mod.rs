//! Evaluation errors and their constructors.
//!
//! Constructors are `#[cold]` free functions so call sites stay one line:
//!
//! ```ignore
//! a.checked_add(b).ok_or_else(|| integer_overflow("addition"))
//! ```

use msd_ir::Span;
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// A run-time failure. Evaluation stops at the first one.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Node that failed, attached by the interpreter.
    pub span: Option<Span>,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("free variable: `{name}` is not bound")]
    UnboundVariable { name: String },

    #[error("{operation} of non-number: found {found}")]
    NonNumericOperand {
        operation: &'static str,
        found: &'static str,
    },

    #[error("expected boolean, found {found}")]
    ExpectedBoolean { found: &'static str },

    #[error("condition must be boolean, found {found}")]
    ConditionNotBoolean { found: &'static str },

    #[error("cannot call non-function value: found {found}")]
    NotCallable { found: &'static str },

    #[error("arithmetic overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnboundVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn non_numeric_operand(operation: &'static str, found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NonNumericOperand { operation, found })
}

#[cold]
pub fn expected_boolean(found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::ExpectedBoolean { found })
}

#[cold]
pub fn condition_not_boolean(found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::ConditionNotBoolean { found })
}

#[cold]
pub fn not_callable(found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { found })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit })
}
