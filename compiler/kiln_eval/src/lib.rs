#![allow(
    clippy::result_large_err,
    reason = "EvalError carries its message inline; boxing would touch every verb"
)]
//! Kiln Eval - tree-walking evaluator for kiln.
//!
//! # Architecture
//!
//! - `Interpreter`: evaluates [`kiln_ir::Node`] trees right to left
//! - `Environment`: a stack of call frames over one global scope
//! - `KTree`: the persistent dotted namespace (`.a.b`) and current branch
//! - `verbs`: the primitive verbs, direct `match` dispatch on [`kiln_ir::Verb`]
//! - `adverbs`: reduce, scan and each as combinators over a callback
//! - `codec`: the binary form used by `_bd` and `_db`
//!
//! # Example
//!
//! ```text
//! let mut interp = Interpreter::new();
//! let value = interp.eval_source("+/1 2 3")?;
//! assert_eq!(value.to_string(), "6");
//! ```

pub mod adverbs;
pub mod codec;
mod environment;
pub mod interpreter;
mod ktree;
pub mod system;
pub mod verbs;

pub use environment::{Environment, Frame};
pub use interpreter::{
    Interpreter, InterpreterBuilder, InterpreterConfig, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH,
};
pub use ktree::{KTree, DEFAULT_BRANCH};

pub use kiln_value::{EvalError, EvalErrorKind, EvalResult, Value};

#[cfg(test)]
mod tests;
