//! Match, comparison and the total order used by grade.

use std::cmp::Ordering;

use crate::arith::{promote, to_float, NumPair};
use crate::atomic;
use crate::errors::{binary_type_error, EvalError, EvalResult};
use crate::value::Value;

/// Relative tolerance for float match.
pub const FLOAT_TOLERANCE: f64 = 1e-5;

/// Tolerant float equality: `|a-b| < max(|a|,|b|) * 1e-5`.
///
/// `NaN` matches `NaN` and equal infinities match.
#[allow(clippy::float_cmp)]
pub fn float_match(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a == b {
        return true;
    }
    (a - b).abs() < a.abs().max(b.abs()) * FLOAT_TOLERANCE
}

fn numbers_match(x: &Value, y: &Value) -> bool {
    match promote(x, y) {
        Some(NumPair::Int(a, b)) => a == b,
        Some(NumPair::Long(a, b)) => a == b,
        Some(NumPair::Float(a, b)) => float_match(a, b),
        None => false,
    }
}

/// `x~y`: whole-value match.
///
/// Exact for integers, characters and symbols; tolerant for floats;
/// structural for vectors and dictionaries. Numbers of different widths
/// compare by value.
pub fn matches(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Vector { items: a, .. }, Value::Vector { items: b, .. }) => {
            if a.is_empty() && b.is_empty() {
                return x.type_code() == y.type_code();
            }
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(p, q)| matches(p, q))
        }
        (Value::Dictionary(a), Value::Dictionary(b)) => {
            a.len() == b.len()
                && a.entries().iter().zip(b.entries()).all(|(p, q)| {
                    p.key == q.key && matches(&p.value, &q.value)
                })
        }
        (Value::Function(a), Value::Function(b)) => a == b,
        _ if x.is_numeric() && y.is_numeric() => numbers_match(x, y),
        _ => false,
    }
}

fn compare_atoms(op: &str, x: &Value, y: &Value) -> Result<Ordering, EvalError> {
    match (x, y) {
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        (Value::Symbol(a), Value::Symbol(b)) => Ok((**a).cmp(&**b)),
        _ => match promote(x, y) {
            Some(NumPair::Int(a, b)) => Ok(a.cmp(&b)),
            Some(NumPair::Long(a, b)) => Ok(a.cmp(&b)),
            Some(NumPair::Float(a, b)) => Ok(float_order(a, b)),
            None => Err(binary_type_error(op, x, y)),
        },
    }
}

/// `x<y`, atomic.
pub fn less(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &|a, b| {
        compare_atoms("<", a, b).map(|o| Value::Int(i32::from(o == Ordering::Less)))
    })
}

/// `x>y`, atomic.
pub fn more(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &|a, b| {
        compare_atoms(">", a, b).map(|o| Value::Int(i32::from(o == Ordering::Greater)))
    })
}

/// Float order with `NaN` below every number.
fn float_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn class(v: &Value) -> u8 {
    match v {
        Value::Int(_) | Value::Long(_) | Value::Float(_) => 0,
        Value::Char(_) => 1,
        Value::Symbol(_) => 2,
        Value::Vector { .. } => 3,
        Value::Null => 4,
        Value::Dictionary(_) => 5,
        Value::Function(_) => 6,
    }
}

/// Total order used by grade and unique.
///
/// Numbers sort before characters, characters before symbols, symbols
/// before vectors and vectors before everything else. Vectors compare
/// lexicographically.
pub fn order(x: &Value, y: &Value) -> Ordering {
    match (x, y) {
        (Value::Vector { items: a, .. }, Value::Vector { items: b, .. }) => a
            .iter()
            .zip(b.iter())
            .map(|(p, q)| order(p, q))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Char(a), Value::Char(b)) => a.cmp(b),
        (Value::Symbol(a), Value::Symbol(b)) => (**a).cmp(&**b),
        _ if x.is_numeric() && y.is_numeric() => match promote(x, y) {
            Some(NumPair::Int(a, b)) => a.cmp(&b),
            Some(NumPair::Long(a, b)) => a.cmp(&b),
            _ => float_order(
                to_float(x).unwrap_or(f64::NAN),
                to_float(y).unwrap_or(f64::NAN),
            ),
        },
        _ => class(x).cmp(&class(y)),
    }
}
