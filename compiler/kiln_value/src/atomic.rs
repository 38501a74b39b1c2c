//! Elementwise application of atomic operations through nested vectors.
//!
//! An atomic operation is defined on atoms and extended to vectors by
//! pairing elements: vector with vector requires equal lengths, and an atom
//! paired with a vector is broadcast. Nesting is handled by recursion.

use crate::errors::{length_error, EvalResult};
use crate::value::{Value, VectorTag};

/// Operation on a pair of atoms.
pub type DyadicAtomFn<'a> = &'a dyn Fn(&Value, &Value) -> EvalResult;

/// Operation on one atom.
pub type MonadicAtomFn<'a> = &'a dyn Fn(&Value) -> EvalResult;

/// Apply `op` to `x` and `y`, pairing vector elements.
pub fn dyadic(x: &Value, y: &Value, op: DyadicAtomFn<'_>) -> EvalResult {
    match (x, y) {
        (Value::Vector { items: xs, tag }, Value::Vector { items: ys, .. }) => {
            if xs.len() != ys.len() {
                return Err(length_error(xs.len(), ys.len()));
            }
            let items = xs
                .iter()
                .zip(ys.iter())
                .map(|(a, b)| dyadic(a, b, op))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::typed_vector(items, *tag))
        }
        (Value::Vector { items: xs, tag }, atom) => {
            let items = xs
                .iter()
                .map(|a| dyadic(a, atom, op))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::typed_vector(items, *tag))
        }
        (atom, Value::Vector { items: ys, tag }) => {
            let items = ys
                .iter()
                .map(|b| dyadic(atom, b, op))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::typed_vector(items, *tag))
        }
        (a, b) => op(a, b),
    }
}

/// Apply `op` to every atom of `x`.
pub fn monadic(x: &Value, op: MonadicAtomFn<'_>) -> EvalResult {
    match x {
        Value::Vector { items, tag } => {
            let items = items
                .iter()
                .map(|a| monadic(a, op))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::typed_vector(items, *tag))
        }
        atom => op(atom),
    }
}

/// Like [`monadic`], but the empty result keeps `tag` instead of the input's.
pub fn monadic_with_tag(x: &Value, tag: VectorTag, op: MonadicAtomFn<'_>) -> EvalResult {
    match x {
        Value::Vector { items, .. } if items.is_empty() => Ok(Value::empty(tag)),
        _ => monadic(x, op),
    }
}

#[cfg(test)]
mod tests;
