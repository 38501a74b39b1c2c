//! System functions: the reserved underscore names that can be applied.
//!
//! `_n` and `_d` are plain values and are resolved with the other names;
//! everything here takes exactly one argument.

use kiln_value::{
    arith, atomic, domain_error, not_supported, unary_type_error, EvalResult, Value, VectorTag,
};

use crate::codec;

/// Apply the system function `name` to `x`.
pub fn call(name: &str, x: &Value) -> EvalResult {
    tracing::trace!(name, "system function");
    match name {
        "_bd" => Ok(Value::string(codec::serialize(x)?)),
        "_db" => {
            let Some(bytes) = x.as_bytes() else {
                return Err(unary_type_error(name, x));
            };
            codec::deserialize(&bytes)
        }
        "_ic" => atomic::monadic_with_tag(x, VectorTag::Int, &|v| match v {
            Value::Char(c) => Ok(Value::Int(i32::from(*c))),
            _ => Err(unary_type_error("_ic", v)),
        }),
        "_ci" => atomic::monadic_with_tag(x, VectorTag::Char, &|v| {
            let Some(i) = v.as_i64() else {
                return Err(unary_type_error("_ci", v));
            };
            u8::try_from(i)
                .map(Value::Char)
                .map_err(|_| domain_error(format!("_ci: {i} is not a character code")))
        }),
        "_abs" => arith::abs(x),
        "_sqrt" => arith::float_math(name, x, f64::sqrt),
        "_exp" => arith::float_math(name, x, f64::exp),
        "_log" => arith::float_math(name, x, f64::ln),
        "_sin" => arith::float_math(name, x, f64::sin),
        "_cos" => arith::float_math(name, x, f64::cos),
        _ => Err(not_supported(format!("system function {name}"))),
    }
}

#[cfg(test)]
mod tests;
