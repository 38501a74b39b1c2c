//! Text forms of values.
//!
//! `Display` writes the literal source form: reading the text back yields a
//! value that matches the original (functions excepted, which print their
//! source). The same form is returned by `5:x` and printed by the driver.
//!
//! - Uniform numeric vectors are space separated (`1 2 3`, `1 2j`).
//! - Character vectors are quoted strings, symbol vectors run together
//!   (`` `a`b ``).
//! - A one-element vector gets a leading `,`.
//! - Anything else, including vectors holding nulls or other vectors, is
//!   the parenthesized form `(1;"a";_n)`.

use std::fmt::{self, Write};

use crate::value::{Dictionary, FunctionValue, Value, VectorTag};

/// Significant digits shown for floats.
const FLOAT_DIGITS: i32 = 7;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

/// Literal source form, as returned by `5:`.
pub fn to_source(value: &Value) -> String {
    value.to_string()
}

/// Unquoted text of an atom, as produced by `$x`: symbols lose their
/// backtick and characters their quotes.
pub fn format_plain(value: &Value) -> String {
    match value {
        Value::Char(c) => char::from(*c).to_string(),
        Value::Symbol(s) => String::from(&**s),
        other => other.to_string(),
    }
}

fn write_value(out: &mut dyn Write, value: &Value) -> fmt::Result {
    match value {
        Value::Int(i) => write_int(out, *i),
        Value::Long(i) => {
            write_long(out, *i)?;
            out.write_char('j')
        }
        Value::Float(x) => out.write_str(&format_float(*x)),
        Value::Char(c) => write_quoted(out, &[*c]),
        Value::Symbol(s) => write_symbol(out, s),
        Value::Vector { items, tag } => write_vector(out, items, *tag),
        Value::Function(func) => write_function(out, func),
        Value::Null => out.write_str("_n"),
        Value::Dictionary(dict) => write_dictionary(out, dict),
    }
}

fn write_int(out: &mut dyn Write, i: i32) -> fmt::Result {
    match i {
        Value::INT_INF => out.write_str("0I"),
        Value::INT_NULL => out.write_str("0N"),
        Value::INT_NEG_INF => out.write_str("-0I"),
        i => write!(out, "{i}"),
    }
}

fn write_long(out: &mut dyn Write, i: i64) -> fmt::Result {
    match i {
        Value::LONG_INF => out.write_str("0I"),
        Value::LONG_NULL => out.write_str("0N"),
        Value::LONG_NEG_INF => out.write_str("-0I"),
        i => write!(out, "{i}"),
    }
}

/// Float text with up to seven significant digits. Integral values keep a
/// trailing `.0` so they read back as floats.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "0n".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "0i" } else { "-0i" }.to_string();
    }
    if x == 0.0 {
        return "0.0".to_string();
    }
    #[allow(clippy::cast_possible_truncation)]
    let exponent = x.abs().log10().floor() as i32;
    if !(-5..FLOAT_DIGITS).contains(&exponent) {
        #[allow(clippy::cast_sign_loss)]
        let text = format!("{:.*e}", (FLOAT_DIGITS - 1) as usize, x);
        let (mantissa, exp) = text.split_once('e').unwrap_or((&text, "0"));
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        return format!("{mantissa}e{exp}");
    }
    #[allow(clippy::cast_sign_loss)]
    let decimals = (FLOAT_DIGITS - 1 - exponent).max(0) as usize;
    let text = format!("{x:.decimals$}");
    if !text.contains('.') {
        return format!("{text}.0");
    }
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

fn write_escaped(out: &mut dyn Write, bytes: &[u8]) -> fmt::Result {
    for &b in bytes {
        match b {
            b'"' => out.write_str("\\\"")?,
            b'\\' => out.write_str("\\\\")?,
            b'\n' => out.write_str("\\n")?,
            b'\t' => out.write_str("\\t")?,
            b'\r' => out.write_str("\\r")?,
            0x08 => out.write_str("\\b")?,
            0x0c => out.write_str("\\f")?,
            0x20..=0x7e => out.write_char(char::from(b))?,
            _ => write!(out, "\\{b:03o}")?,
        }
    }
    Ok(())
}

fn write_quoted(out: &mut dyn Write, bytes: &[u8]) -> fmt::Result {
    out.write_char('"')?;
    write_escaped(out, bytes)?;
    out.write_char('"')
}

/// Whether a symbol can be written without quotes.
fn is_plain_symbol(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '.' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        }
        Some(_) => false,
    }
}

fn write_symbol(out: &mut dyn Write, name: &str) -> fmt::Result {
    out.write_char('`')?;
    if is_plain_symbol(name) {
        out.write_str(name)
    } else {
        write_quoted(out, name.as_bytes())
    }
}

fn write_empty(out: &mut dyn Write, tag: VectorTag) -> fmt::Result {
    out.write_str(match tag {
        VectorTag::General => "()",
        VectorTag::Int => "!0",
        VectorTag::Long => "0#0j",
        VectorTag::Float => "0#0.0",
        VectorTag::Char => "\"\"",
        VectorTag::Symbol => "0#`",
    })
}

fn write_vector(out: &mut dyn Write, items: &[Value], tag: VectorTag) -> fmt::Result {
    if items.is_empty() {
        return write_empty(out, tag);
    }
    if items.len() == 1 {
        out.write_char(',')?;
    }
    match VectorTag::infer(items) {
        VectorTag::Char => {
            let bytes: Vec<u8> = items
                .iter()
                .filter_map(|v| match v {
                    Value::Char(c) => Some(*c),
                    _ => None,
                })
                .collect();
            write_quoted(out, &bytes)
        }
        VectorTag::Symbol => items.iter().try_for_each(|v| write_value(out, v)),
        VectorTag::Long => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                if let Value::Long(n) = item {
                    write_long(out, *n)?;
                }
            }
            out.write_char('j')
        }
        VectorTag::Int | VectorTag::Float => write_spaced(out, items),
        VectorTag::General => write_list(out, items),
    }
}

fn write_spaced(out: &mut dyn Write, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write_value(out, item)?;
    }
    Ok(())
}

fn write_list(out: &mut dyn Write, items: &[Value]) -> fmt::Result {
    out.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(';')?;
        }
        write_value(out, item)?;
    }
    out.write_char(')')
}

fn write_function(out: &mut dyn Write, func: &FunctionValue) -> fmt::Result {
    out.write_str(func.source())?;
    if !func.is_projection() {
        return Ok(());
    }
    out.write_char('[')?;
    for (i, slot) in func.bound().iter().enumerate() {
        if i > 0 {
            out.write_char(';')?;
        }
        if let Some(v) = slot {
            write_value(out, v)?;
        }
    }
    out.write_char(']')
}

/// `.((`a;1;);(`b;2;))`: one `(key;value;attributes)` triple per entry.
fn write_dictionary(out: &mut dyn Write, dict: &Dictionary) -> fmt::Result {
    out.write_char('.')?;
    if dict.len() == 1 {
        out.write_char(',')?;
    }
    out.write_char('(')?;
    for (i, entry) in dict.entries().iter().enumerate() {
        if i > 0 {
            out.write_char(';')?;
        }
        out.write_char('(')?;
        write_symbol(out, &entry.key)?;
        out.write_char(';')?;
        write_value(out, &entry.value)?;
        out.write_char(';')?;
        if let Some(attributes) = &entry.attributes {
            write_dictionary(out, attributes)?;
        }
        out.write_char(')')?;
    }
    out.write_char(')')
}
