//! The error type returned by the entry points.

use msd_eval::EvalError;
use msd_ir::Span;
use msd_parse::ParseError;
use thiserror::Error;

/// A syntax error or a run-time error.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MsdError {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}

impl MsdError {
    /// Source location of the failure, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            MsdError::Syntax(error) => Some(error.span),
            MsdError::Evaluation(error) => error.span,
        }
    }

    /// The message without the category prefix.
    pub fn message(&self) -> String {
        match self {
            MsdError::Syntax(error) => error.to_string(),
            MsdError::Evaluation(error) => error.to_string(),
        }
    }

    /// Short category label, `syntax error` or `evaluation error`.
    pub fn category(&self) -> &'static str {
        match self {
            MsdError::Syntax(_) => "syntax error",
            MsdError::Evaluation(_) => "evaluation error",
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, MsdError::Syntax(_))
    }
}
