//! `$`: formatting values as character vectors.

use kiln_value::display::{format_plain, to_source};
use kiln_value::{binary_type_error, EvalResult, Value, VectorTag};

use super::checked_length;

/// `$x`: character vector of an atom; a string is returned unchanged and
/// other vectors are formatted element by element.
pub fn format(x: &Value) -> Value {
    match x {
        Value::Vector { items, tag } => {
            if items.is_empty() {
                return Value::empty(if *tag == VectorTag::Char {
                    VectorTag::Char
                } else {
                    VectorTag::General
                });
            }
            if x.as_bytes().is_some() {
                return x.clone();
            }
            Value::vector(items.iter().map(format).collect())
        }
        Value::Dictionary(_) | Value::Function(_) => Value::string(to_source(x)),
        atom => Value::string(format_plain(atom)),
    }
}

/// `n$y`: format `y` and pad it to `|n|` characters, left-aligned when `n`
/// is positive and right-aligned when negative. Longer text is truncated.
pub fn pad(x: &Value, y: &Value) -> EvalResult {
    let Some(n) = x.as_i64() else {
        return Err(binary_type_error("$", x, y));
    };
    if let Value::Vector { items, .. } = y {
        if y.as_bytes().is_none() {
            let padded = items
                .iter()
                .map(|item| pad(x, item))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Value::vector(padded));
        }
    }
    let text = format(y).as_bytes().unwrap_or_default();
    let width = checked_length(n.unsigned_abs(), "pad")?;
    let mut out = Vec::with_capacity(width);
    if n >= 0 {
        out.extend(text.iter().take(width));
        out.resize(width, b' ');
    } else {
        let shown = &text[text.len().saturating_sub(width)..];
        out.resize(width - shown.len(), b' ');
        out.extend_from_slice(shown);
    }
    Ok(Value::string(out))
}
