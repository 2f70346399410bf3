//! msdscript evaluator.
//!
//! - [`Environment`]: persistent chain of variable bindings
//! - [`Value`]: numbers, booleans and closures
//! - [`Interpreter`]: walks an [`msd_ir::ExprArena`] and produces a [`Value`]
//! - [`EvalError`]: everything that can go wrong at run time
//!
//! Evaluation is single-threaded. Environments and closures share ownership
//! through `Rc`, and a closure keeps the arena holding its body alive through
//! a [`msd_ir::SharedArena`] handle.

mod environment;
pub mod errors;
mod interpreter;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{EvalConfig, Interpreter};
pub use value::{FunctionValue, Value};
