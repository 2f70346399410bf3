//! msdscript printers.
//!
//! Two renderings of an expression tree:
//!
//! - [`format_expr`]: the pretty form. Operators get surrounding spaces and
//!   only the parentheses precedence demands; `_let`, `_if` and non-trivial
//!   `_fun` bodies break over lines, aligned on the column where the construct
//!   started.
//! - [`inline_expr`]: the compact form. Every compound node is wrapped in
//!   parentheses and everything stays on one line.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`context`]: column tracking and configuration
//! - [`formatter`]: the pretty-printer

pub mod context;
pub mod emitter;
pub mod formatter;
mod inline;

pub use context::{FormatConfig, FormatContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::{format_expr, Formatter};
pub use inline::inline_expr;
