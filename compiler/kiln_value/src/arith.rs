//! Numeric operations with K promotion rules.
//!
//! - `Int ⊕ Int` is `Int`, wrapping on overflow.
//! - `Int ⊕ Long` is `Long`; any integer with a `Float` is `Float`.
//! - Promotion maps sentinels to sentinels: `0N → 0Nj → 0n`,
//!   `0I → 0Ij → 0i`, `-0I → -0Ij → -0i`.
//! - Integer division is exact or produces a `Float`; a zero divisor is an
//!   error for every numeric type.

use crate::atomic;
use crate::errors::{binary_type_error, division_by_zero, unary_type_error, EvalResult};
use crate::value::{Value, VectorTag};

/// Both operands promoted to their common numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumPair {
    Int(i32, i32),
    Long(i64, i64),
    Float(f64, f64),
}

/// Widen an `Int` to `Long`, keeping sentinels.
pub fn int_to_long(i: i32) -> i64 {
    match i {
        Value::INT_INF => Value::LONG_INF,
        Value::INT_NULL => Value::LONG_NULL,
        Value::INT_NEG_INF => Value::LONG_NEG_INF,
        i => i64::from(i),
    }
}

/// Widen an `Int` to `Float`, keeping sentinels.
pub fn int_to_float(i: i32) -> f64 {
    match i {
        Value::INT_INF => f64::INFINITY,
        Value::INT_NULL => f64::NAN,
        Value::INT_NEG_INF => f64::NEG_INFINITY,
        i => f64::from(i),
    }
}

/// Widen a `Long` to `Float`, keeping sentinels.
#[allow(clippy::cast_precision_loss)]
pub fn long_to_float(i: i64) -> f64 {
    match i {
        Value::LONG_INF => f64::INFINITY,
        Value::LONG_NULL => f64::NAN,
        Value::LONG_NEG_INF => f64::NEG_INFINITY,
        i => i as f64,
    }
}

/// Numeric atom as `f64`, keeping sentinels.
pub fn to_float(v: &Value) -> Option<f64> {
    match *v {
        Value::Int(i) => Some(int_to_float(i)),
        Value::Long(i) => Some(long_to_float(i)),
        Value::Float(f) => Some(f),
        _ => None,
    }
}

/// Promote two numeric atoms to a common type.
pub fn promote(x: &Value, y: &Value) -> Option<NumPair> {
    Some(match (x, y) {
        (&Value::Int(a), &Value::Int(b)) => NumPair::Int(a, b),
        (&Value::Int(a), &Value::Long(b)) => NumPair::Long(int_to_long(a), b),
        (&Value::Long(a), &Value::Int(b)) => NumPair::Long(a, int_to_long(b)),
        (&Value::Long(a), &Value::Long(b)) => NumPair::Long(a, b),
        _ => NumPair::Float(to_float(x)?, to_float(y)?),
    })
}

fn arith_atoms(
    op: &str,
    x: &Value,
    y: &Value,
    int: fn(i32, i32) -> i32,
    long: fn(i64, i64) -> i64,
    float: fn(f64, f64) -> f64,
) -> EvalResult {
    match promote(x, y) {
        Some(NumPair::Int(a, b)) => Ok(Value::Int(int(a, b))),
        Some(NumPair::Long(a, b)) => Ok(Value::Long(long(a, b))),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(float(a, b))),
        None => Err(binary_type_error(op, x, y)),
    }
}

fn add_atoms(x: &Value, y: &Value) -> EvalResult {
    arith_atoms("+", x, y, i32::wrapping_add, i64::wrapping_add, |a, b| a + b)
}

fn subtract_atoms(x: &Value, y: &Value) -> EvalResult {
    arith_atoms("-", x, y, i32::wrapping_sub, i64::wrapping_sub, |a, b| a - b)
}

fn multiply_atoms(x: &Value, y: &Value) -> EvalResult {
    arith_atoms("*", x, y, i32::wrapping_mul, i64::wrapping_mul, |a, b| a * b)
}

fn divide_atoms(x: &Value, y: &Value) -> EvalResult {
    match promote(x, y) {
        Some(NumPair::Int(a, b)) => {
            if b == 0 {
                Err(division_by_zero())
            } else if a.wrapping_rem(b) == 0 {
                Ok(Value::Int(a.wrapping_div(b)))
            } else {
                Ok(Value::Float(int_to_float(a) / int_to_float(b)))
            }
        }
        Some(NumPair::Long(a, b)) => {
            if b == 0 {
                Err(division_by_zero())
            } else if a.wrapping_rem(b) == 0 {
                Ok(Value::Long(a.wrapping_div(b)))
            } else {
                Ok(Value::Float(long_to_float(a) / long_to_float(b)))
            }
        }
        Some(NumPair::Float(a, b)) => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(a / b))
            }
        }
        None => Err(binary_type_error("%", x, y)),
    }
}

fn min_atoms(x: &Value, y: &Value) -> EvalResult {
    if let (Value::Char(a), Value::Char(b)) = (x, y) {
        return Ok(Value::Char(*a.min(b)));
    }
    arith_atoms("&", x, y, i32::min, i64::min, |a, b| {
        if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.min(b)
        }
    })
}

fn max_atoms(x: &Value, y: &Value) -> EvalResult {
    if let (Value::Char(a), Value::Char(b)) = (x, y) {
        return Ok(Value::Char(*a.max(b)));
    }
    arith_atoms("|", x, y, i32::max, i64::max, |a, b| {
        if a.is_nan() {
            b
        } else if b.is_nan() {
            a
        } else {
            a.max(b)
        }
    })
}

/// Floored remainder: the result takes the sign of the divisor.
fn modulo_atoms(x: &Value, y: &Value) -> EvalResult {
    match promote(x, y) {
        Some(NumPair::Int(_, 0) | NumPair::Long(_, 0)) => Err(division_by_zero()),
        Some(NumPair::Int(a, b)) => {
            let r = a.wrapping_rem(b);
            Ok(Value::Int(if r != 0 && (r < 0) != (b < 0) { r + b } else { r }))
        }
        Some(NumPair::Long(a, b)) => {
            let r = a.wrapping_rem(b);
            Ok(Value::Long(if r != 0 && (r < 0) != (b < 0) { r + b } else { r }))
        }
        Some(NumPair::Float(a, b)) => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(a - b * (a / b).floor()))
            }
        }
        None => Err(binary_type_error("!", x, y)),
    }
}

fn power_atoms(x: &Value, y: &Value) -> EvalResult {
    match (to_float(x), to_float(y)) {
        (Some(a), Some(b)) => Ok(Value::Float(a.powf(b))),
        _ => Err(binary_type_error("^", x, y)),
    }
}

pub fn add(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &add_atoms)
}

pub fn subtract(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &subtract_atoms)
}

pub fn multiply(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &multiply_atoms)
}

pub fn divide(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &divide_atoms)
}

pub fn min(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &min_atoms)
}

pub fn max(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &max_atoms)
}

pub fn modulo(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &modulo_atoms)
}

pub fn power(x: &Value, y: &Value) -> EvalResult {
    atomic::dyadic(x, y, &power_atoms)
}

pub fn negate(x: &Value) -> EvalResult {
    atomic::monadic(x, &|v| match *v {
        Value::Int(i) => Ok(Value::Int(i.wrapping_neg())),
        Value::Long(i) => Ok(Value::Long(i.wrapping_neg())),
        Value::Float(f) => Ok(Value::Float(-f)),
        _ => Err(unary_type_error("negate", v)),
    })
}

/// `%x`: always a float.
pub fn reciprocal(x: &Value) -> EvalResult {
    atomic::monadic_with_tag(x, VectorTag::Float, &|v| match to_float(v) {
        Some(f) if f == 0.0 => Err(division_by_zero()),
        Some(f) => Ok(Value::Float(1.0 / f)),
        None => Err(unary_type_error("reciprocal", v)),
    })
}

/// `_x`: integers unchanged, floats rounded down to `Int` (or `Long` when
/// out of `Int` range), float sentinels to int sentinels.
pub fn floor(x: &Value) -> EvalResult {
    atomic::monadic_with_tag(x, VectorTag::Int, &|v| match *v {
        Value::Int(_) | Value::Long(_) => Ok(v.clone()),
        Value::Float(f) => Ok(floor_float(f)),
        _ => Err(unary_type_error("floor", v)),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn floor_float(f: f64) -> Value {
    if f.is_nan() {
        return Value::Int(Value::INT_NULL);
    }
    if f == f64::INFINITY {
        return Value::Int(Value::INT_INF);
    }
    if f == f64::NEG_INFINITY {
        return Value::Int(Value::INT_NEG_INF);
    }
    let floored = f.floor();
    if floored > f64::from(Value::INT_NEG_INF) && floored < f64::from(Value::INT_INF) {
        Value::Int(floored as i32)
    } else {
        Value::Long(floored as i64)
    }
}

/// `~x`: 1 where zero, 0 elsewhere.
pub fn not(x: &Value) -> EvalResult {
    atomic::monadic_with_tag(x, VectorTag::Int, &|v| match *v {
        Value::Int(i) => Ok(Value::Int(i32::from(i == 0))),
        Value::Long(i) => Ok(Value::Int(i32::from(i == 0))),
        Value::Float(f) => Ok(Value::Int(i32::from(f == 0.0))),
        Value::Char(c) => Ok(Value::Int(i32::from(c == 0))),
        _ => Err(unary_type_error("not", v)),
    })
}

/// `_abs`: integer types are preserved.
pub fn abs(x: &Value) -> EvalResult {
    atomic::monadic(x, &|v| match *v {
        Value::Int(i) if i == Value::INT_NULL => Ok(v.clone()),
        Value::Long(i) if i == Value::LONG_NULL => Ok(v.clone()),
        Value::Int(i) => Ok(Value::Int(i.wrapping_abs())),
        Value::Long(i) => Ok(Value::Long(i.wrapping_abs())),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        _ => Err(unary_type_error("_abs", v)),
    })
}

/// Float-valued math function (`_sqrt`, `_exp`, `_log`, `_sin`, `_cos`).
pub fn float_math(name: &str, x: &Value, f: fn(f64) -> f64) -> EvalResult {
    atomic::monadic_with_tag(x, VectorTag::Float, &|v| match to_float(v) {
        Some(a) => Ok(Value::Float(f(a))),
        None => Err(unary_type_error(name, v)),
    })
}

#[cfg(test)]
mod tests;
