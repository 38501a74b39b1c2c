#![allow(
    clippy::result_large_err,
    reason = "EvalError carries its message inline; boxing would touch every verb"
)]
//! Kiln Value - runtime values for the kiln interpreter.
//!
//! This crate provides:
//! - The closed `Value` enum with sentinels, vector tags and dictionaries
//! - Function values and projection slots (`FunctionValue`)
//! - Evaluation errors (`EvalError`, `EvalErrorKind`) and their factories
//! - Atomic arithmetic and comparison with K promotion rules
//! - The literal text form used by `5:` and the driver
//!
//! # Heap Enforcement
//!
//! Heap-backed variants go through `Value::` factory methods; `Heap<T>`
//! cannot be built outside the value module.

pub mod arith;
pub mod atomic;
pub mod compare;
pub mod display;
mod errors;
mod value;

pub use errors::{
    arity_error, binary_type_error, division_by_zero, domain_error, index_out_of_bounds,
    key_not_found, length_error, not_supported, parse_deferred, parse_error, rank_error,
    stack_overflow, type_error, unary_type_error, undefined_variable, EvalError, EvalErrorKind,
    EvalResult,
};
pub use value::{
    type_code, DictEntry, Dictionary, FunctionDef, FunctionValue, Heap, Value, VectorTag,
};
