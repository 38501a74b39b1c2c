//! The primitive verbs.
//!
//! Every glyph has a monadic and a dyadic meaning, dispatched by direct
//! pattern matching on [`Verb`]. The type set is closed, so a `match` gives
//! exhaustiveness checking that a table of function pointers would not.
//!
//! Verbs here are pure functions of their arguments. Applying a function
//! value through `@` or `.`, and executing a string with monadic `.`, need
//! the interpreter and are intercepted before reaching this module.

mod format;
mod index;
mod search;
mod structure;

use kiln_ir::Verb;
use kiln_value::compare::matches;
use kiln_value::display::to_source;
use kiln_value::{
    arith, binary_type_error, compare, domain_error, not_supported, type_error, unary_type_error,
    Dictionary, EvalError, EvalResult, Value, VectorTag,
};

pub use format::{format, pad};
pub use index::{dictionary_from_triples, dictionary_triples, index, index_path, path_items};
pub use search::{find, grade, group, unique, where_};
pub use structure::{cut, drop, flip, join, reshape, rotate, shape, take};

/// Longest vector a verb builds from a count found in its arguments.
pub const MAX_LENGTH: usize = 1 << 26;

/// A requested result length, or a domain error when it exceeds
/// [`MAX_LENGTH`].
pub(crate) fn checked_length(n: u64, what: &str) -> Result<usize, EvalError> {
    usize::try_from(n)
        .ok()
        .filter(|&len| len <= MAX_LENGTH)
        .ok_or_else(|| domain_error(format!("{what} length {n} is too large")))
}

/// Apply `verb` to one argument.
pub fn monadic(verb: Verb, x: &Value) -> EvalResult {
    match verb {
        Verb::Plus => flip(x),
        Verb::Minus => arith::negate(x),
        Verb::Star => Ok(first(x)),
        Verb::Percent => arith::reciprocal(x),
        Verb::Bang => enumerate(x),
        Verb::Amp => where_(x),
        Verb::Pipe => Ok(reverse(x)),
        Verb::Less => grade(x, false),
        Verb::More => grade(x, true),
        Verb::Equal => Ok(group(x)),
        Verb::Tilde => arith::not(x),
        Verb::At => Ok(Value::Int(i32::from(x.is_atom()))),
        Verb::Question => Ok(unique(x)),
        Verb::Hash => Ok(Value::from_usize(x.count())),
        Verb::Underscore => arith::floor(x),
        Verb::Caret => Ok(shape(x)),
        Verb::Comma => Ok(Value::vector(vec![x.clone()])),
        Verb::Dollar => Ok(format(x)),
        Verb::Dot => dot_monadic(x),
        Verb::Colon => Err(not_supported("monadic return")),
        Verb::TypeCode => Ok(Value::Int(x.type_code())),
        Verb::Represent => Ok(Value::string(to_source(x))),
    }
}

/// Apply `verb` to two arguments.
pub fn dyadic(verb: Verb, x: &Value, y: &Value) -> EvalResult {
    match verb {
        Verb::Plus => arith::add(x, y),
        Verb::Minus => arith::subtract(x, y),
        Verb::Star => arith::multiply(x, y),
        Verb::Percent => arith::divide(x, y),
        Verb::Bang => mod_or_rotate(x, y),
        Verb::Amp => arith::min(x, y),
        Verb::Pipe => arith::max(x, y),
        Verb::Less => compare::less(x, y),
        Verb::More => compare::more(x, y),
        Verb::Equal | Verb::Tilde => Ok(Value::Int(i32::from(matches(x, y)))),
        Verb::At => index(x, y),
        Verb::Question => Ok(find(x, y)),
        Verb::Hash => take_or_reshape(x, y),
        Verb::Underscore => drop_or_cut(x, y),
        Verb::Caret => arith::power(x, y),
        Verb::Comma => Ok(join(x, y)),
        Verb::Dollar => pad(x, y),
        Verb::Dot => index_path(x, &path_items(y)),
        Verb::Colon => Ok(y.clone()),
        Verb::TypeCode | Verb::Represent => Err(not_supported(format!("dyadic {verb}"))),
    }
}

/// The null of a vector kind, used where an element is missing.
pub fn null_of(tag: VectorTag) -> Value {
    match tag {
        VectorTag::General => Value::Null,
        VectorTag::Int => Value::Int(Value::INT_NULL),
        VectorTag::Long => Value::Long(Value::LONG_NULL),
        VectorTag::Float => Value::Float(f64::NAN),
        VectorTag::Char => Value::Char(b' '),
        VectorTag::Symbol => Value::symbol(""),
    }
}

/// `*x`
fn first(x: &Value) -> Value {
    match x {
        Value::Vector { items, tag } => items.first().cloned().unwrap_or_else(|| null_of(*tag)),
        Value::Dictionary(d) => d.values().next().cloned().unwrap_or(Value::Null),
        atom => atom.clone(),
    }
}

/// `|x`
fn reverse(x: &Value) -> Value {
    match x {
        Value::Vector { items, tag } => {
            Value::typed_vector(items.iter().rev().cloned().collect(), *tag)
        }
        Value::Dictionary(d) => {
            let mut reversed = Dictionary::new();
            for entry in d.entries().iter().rev() {
                reversed.insert_with_attributes(&entry.key, entry.value.clone(), entry.attributes.clone());
            }
            Value::dictionary(reversed)
        }
        atom => atom.clone(),
    }
}

/// `!x`: `0..x` for an integer, the keys of a dictionary.
fn enumerate(x: &Value) -> EvalResult {
    match x {
        Value::Dictionary(d) => Ok(Value::typed_vector(
            d.keys().map(Value::symbol).collect(),
            VectorTag::Symbol,
        )),
        _ => match x.as_i64() {
            Some(n) if n < 0 => Err(domain_error(format!("cannot enumerate {n}"))),
            Some(n) => {
                let n = checked_length(n.unsigned_abs(), "enumerate")?;
                Ok(Value::int_vector(0..i32::try_from(n).unwrap_or(i32::MAX)))
            }
            None => Err(unary_type_error("enumerate", x)),
        },
    }
}

/// `x!y`: remainder when `y` is a number, rotation when `y` is a vector.
fn mod_or_rotate(x: &Value, y: &Value) -> EvalResult {
    match (x.as_i64(), y) {
        (_, Value::Int(_) | Value::Long(_) | Value::Float(_)) => arith::modulo(x, y),
        (Some(n), Value::Vector { .. }) => Ok(rotate(n, y)),
        _ => Err(binary_type_error("!", x, y)),
    }
}

fn take_or_reshape(x: &Value, y: &Value) -> EvalResult {
    if let Some(n) = x.as_i64() {
        return take(n, y);
    }
    match x.as_vector() {
        Some(dims) => {
            let dims = dims
                .iter()
                .map(|d| match d.as_i64() {
                    Some(n) if n >= 0 => checked_length(n.unsigned_abs(), "reshape"),
                    _ => Err(domain_error("reshape needs non-negative integers")),
                })
                .collect::<Result<Vec<_>, _>>()?;
            let total = dims.iter().try_fold(1u64, |acc, &d| acc.checked_mul(d as u64));
            checked_length(total.unwrap_or(u64::MAX), "reshape")?;
            Ok(reshape(&dims, y))
        }
        None => Err(binary_type_error("#", x, y)),
    }
}

fn drop_or_cut(x: &Value, y: &Value) -> EvalResult {
    if let Some(n) = x.as_i64() {
        return Ok(drop(n, y));
    }
    match x.as_vector() {
        Some(indices) => cut(indices, y),
        None => Err(binary_type_error("_", x, y)),
    }
}

/// Monadic `.` on data: dictionary to `(key;value;attributes)` triples and
/// back. Strings are executed by the interpreter before reaching here.
fn dot_monadic(x: &Value) -> EvalResult {
    match x {
        Value::Dictionary(_) => Ok(dictionary_triples(x)),
        Value::Vector { .. } => dictionary_from_triples(x),
        _ => Err(type_error(format!("cannot execute {}", x.type_name()))),
    }
}
