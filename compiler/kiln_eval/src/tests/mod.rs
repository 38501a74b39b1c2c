//! Evaluator scenarios: whole programs run through `eval_source`.
//!
//! - `functions`: calls, projection, recursion, deferred bodies
//! - `adverbs`: derived verbs as written in source
//! - `apply`: trapped apply and amend
//! - `display`: printed forms of verb results
//! - `namespace`: the K-tree and branch-tagged functions
//! - `codec`: `_bd` and `_db` from source

mod adverbs;
mod apply;
mod functions;

use crate::{EvalErrorKind, Interpreter};

/// Printed result of `source` in a fresh interpreter.
pub(crate) fn run(source: &str) -> String {
    match Interpreter::new().eval_source(source) {
        Ok(value) => value.to_string(),
        Err(err) => panic!("{source}: {err}"),
    }
}

/// Error kind `source` fails with in a fresh interpreter.
pub(crate) fn run_err(source: &str) -> EvalErrorKind {
    match Interpreter::new().eval_source(source) {
        Ok(value) => panic!("{source}: expected an error, got {value}"),
        Err(err) => err.kind,
    }
}
