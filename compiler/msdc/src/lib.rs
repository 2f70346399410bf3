//! msdscript entry points.
//!
//! Each entry point runs the whole pipeline on one source string:
//!
//! ```text
//! source ──lex──▶ TokenList ──parse──▶ ExprArena ──┬─eval───▶ Value
//!                                                  └─format─▶ String
//! ```
//!
//! The first failure wins: a syntax error stops before evaluation, and
//! evaluation stops at the first run-time error.

pub mod commands;
mod error;
pub mod report;
pub mod tracing_setup;

pub use error::MsdError;

use msd_eval::Interpreter;
use msd_fmt::{format_expr, inline_expr};
use msd_ir::{SharedArena, StringInterner};
use msd_parse::parse_source;
use tracing::debug;

/// Interpret `source` and return the display form of its value.
///
/// ```
/// assert_eq!(msdc::evaluate("_let x = 5 _in x * x").unwrap(), "25");
/// ```
pub fn evaluate(source: &str) -> Result<String, MsdError> {
    let mut interner = StringInterner::new();
    let output = parse_source(source, &mut interner)?;
    let arena = SharedArena::new(output.arena);
    let value = Interpreter::new(&arena, &interner).eval_root(output.root)?;
    debug!(value = %value, "evaluate");
    Ok(value.to_string())
}

/// Parse `source` and pretty-print it.
pub fn format(source: &str) -> Result<String, MsdError> {
    let mut interner = StringInterner::new();
    let output = parse_source(source, &mut interner)?;
    Ok(format_expr(&output.arena, &interner, output.root))
}

/// Parse `source` and print it on one line, fully parenthesized.
pub fn format_inline(source: &str) -> Result<String, MsdError> {
    let mut interner = StringInterner::new();
    let output = parse_source(source, &mut interner)?;
    Ok(inline_expr(&output.arena, &interner, output.root))
}

#[cfg(test)]
mod tests;
