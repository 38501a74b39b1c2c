//! The adverbs: reduce, scan, each and their relatives.
//!
//! Every adverb here is a combinator over a callback that applies the
//! operand. The interpreter builds the callback (a verb, a function or a
//! projection, possibly re-entering evaluation), so this module never sees
//! scope or call frames.
//!
//! | Form         | Dyadic operand          | Monadic operand            |
//! |--------------|-------------------------|----------------------------|
//! | `f/x`        | reduce                  | converge                   |
//! | `s f/x`      | reduce from seed `s`    | `n` times, or while `s[x]` |
//! | `f\x`        | scan                    | converge, keeping each step|
//! | `f'x`        | -                       | map                        |
//! | `x f'y`      | pairwise                | -                          |
//! | `x f/: y`    | `f[x[i];y]` for each i  | -                          |
//! | `x f\: y`    | `f[x;y[j]]` for each j  | -                          |
//! | `f':x`       | `f[x[i];x[i-1]]`        | -                          |

use kiln_ir::Verb;
use kiln_value::compare::matches;
use kiln_value::{length_error, EvalError, EvalResult, Value, VectorTag};

/// Operand applied to two arguments.
pub type Dyad<'a> = dyn FnMut(&Value, &Value) -> EvalResult + 'a;

/// Operand applied to one argument.
pub type Monad<'a> = dyn FnMut(&Value) -> EvalResult + 'a;

/// One step of a conditional iteration: `None` once the condition fails.
pub type Step<'a> = dyn FnMut(&Value) -> Result<Option<Value>, EvalError> + 'a;

/// Result of reducing an empty list without a seed.
///
/// `*` reduces to 1; `+` and every other operand reduce to 0.
pub fn identity(verb: Option<Verb>) -> Value {
    match verb {
        Some(Verb::Star) => Value::Int(1),
        _ => Value::Int(0),
    }
}

/// `f/x` and `s f/x`.
///
/// Without a seed the first element starts the reduction; an empty list
/// then yields `identity`. With a seed an empty list yields the seed.
pub fn over(f: &mut Dyad<'_>, seed: Option<&Value>, x: &Value, identity: &Value) -> EvalResult {
    let mut items = x.to_items().into_iter();
    let mut acc = match seed {
        Some(seed) => seed.clone(),
        None => match items.next() {
            Some(first) => first,
            None => return Ok(identity.clone()),
        },
    };
    for item in items {
        acc = f(&acc, &item)?;
    }
    Ok(acc)
}

/// `f\x` and `s f\x`: every partial reduction, starting with the seed.
pub fn scan(f: &mut Dyad<'_>, seed: Option<&Value>, x: &Value) -> EvalResult {
    let tag = x.element_tag();
    let mut items = x.to_items().into_iter();
    let mut acc = match seed {
        Some(seed) => seed.clone(),
        None => match items.next() {
            Some(first) => first,
            None => return Ok(Value::empty(tag)),
        },
    };
    let mut partials = vec![acc.clone()];
    for item in items {
        acc = f(&acc, &item)?;
        partials.push(acc.clone());
    }
    Ok(Value::vector(partials))
}

/// Apply `f` until the result matches the previous one or the input.
fn fixpoint(f: &mut Monad<'_>, x: &Value) -> Result<Vec<Value>, EvalError> {
    let mut steps = vec![x.clone()];
    let mut prev = x.clone();
    loop {
        let next = f(&prev)?;
        if matches(&next, &prev) || matches(&next, x) {
            return Ok(steps);
        }
        steps.push(next.clone());
        prev = next;
    }
}

/// `f/x` with a monadic `f`: the converged value.
pub fn converge(f: &mut Monad<'_>, x: &Value) -> EvalResult {
    let mut steps = fixpoint(f, x)?;
    Ok(steps.pop().unwrap_or_else(|| x.clone()))
}

/// `f\x` with a monadic `f`: the input and every distinct step.
pub fn converge_scan(f: &mut Monad<'_>, x: &Value) -> EvalResult {
    Ok(Value::vector(fixpoint(f, x)?))
}

/// `n f/x`: `f` applied `n` times.
pub fn repeat(f: &mut Monad<'_>, n: usize, x: &Value) -> EvalResult {
    let mut acc = x.clone();
    for _ in 0..n {
        acc = f(&acc)?;
    }
    Ok(acc)
}

/// `n f\x`: the input and each of the `n` applications.
pub fn repeat_scan(f: &mut Monad<'_>, n: usize, x: &Value) -> EvalResult {
    let mut acc = x.clone();
    let mut steps = vec![acc.clone()];
    for _ in 0..n {
        acc = f(&acc)?;
        steps.push(acc.clone());
    }
    Ok(Value::vector(steps))
}

fn iterate(step: &mut Step<'_>, x: &Value) -> Result<Vec<Value>, EvalError> {
    let mut steps = vec![x.clone()];
    let mut acc = x.clone();
    while let Some(next) = step(&acc)? {
        steps.push(next.clone());
        acc = next;
    }
    Ok(steps)
}

/// `c f/x`: apply `f` while `c` holds for the current value.
pub fn iterate_while(step: &mut Step<'_>, x: &Value) -> EvalResult {
    let mut steps = iterate(step, x)?;
    Ok(steps.pop().unwrap_or_else(|| x.clone()))
}

/// `c f\x`: every value visited while `c` held, and the last.
pub fn iterate_while_scan(step: &mut Step<'_>, x: &Value) -> EvalResult {
    Ok(Value::vector(iterate(step, x)?))
}

fn collect(results: Vec<Value>, empty: VectorTag) -> Value {
    Value::typed_vector(results, empty)
}

/// `f'x`: `f` applied to each element; an atom is applied to directly.
pub fn each(f: &mut Monad<'_>, x: &Value) -> EvalResult {
    match x {
        Value::Vector { items, tag } => {
            let results = items.iter().map(|item| f(item)).collect::<Result<_, _>>()?;
            Ok(collect(results, *tag))
        }
        atom => f(atom),
    }
}

/// `x f'y`: pairwise over equal-length vectors, broadcasting an atom.
pub fn each_pair(f: &mut Dyad<'_>, x: &Value, y: &Value) -> EvalResult {
    let results = match (x.as_vector(), y.as_vector()) {
        (Some(xs), Some(ys)) => {
            if xs.len() != ys.len() {
                return Err(length_error(xs.len(), ys.len()));
            }
            xs.iter()
                .zip(ys)
                .map(|(a, b)| f(a, b))
                .collect::<Result<_, _>>()?
        }
        (Some(xs), None) => xs.iter().map(|a| f(a, y)).collect::<Result<_, _>>()?,
        (None, Some(ys)) => ys.iter().map(|b| f(x, b)).collect::<Result<_, _>>()?,
        (None, None) => return f(x, y),
    };
    Ok(collect(results, VectorTag::General))
}

/// `x f/: y`: `f[x[i]; y]` for each element of `x`.
pub fn each_right(f: &mut Dyad<'_>, x: &Value, y: &Value) -> EvalResult {
    let results = x
        .to_items()
        .iter()
        .map(|a| f(a, y))
        .collect::<Result<_, _>>()?;
    Ok(collect(results, VectorTag::General))
}

/// `x f\: y`: `f[x; y[j]]` for each element of `y`.
pub fn each_left(f: &mut Dyad<'_>, x: &Value, y: &Value) -> EvalResult {
    let results = y
        .to_items()
        .iter()
        .map(|b| f(x, b))
        .collect::<Result<_, _>>()?;
    Ok(collect(results, VectorTag::General))
}

/// `f':x`: each element paired with its predecessor, `n-1` results for
/// `n` elements. A left argument stands for the predecessor of the first
/// element, which itself produces nothing, so `s f':x` gives the same
/// results as `f':x`.
pub fn each_prior(f: &mut Dyad<'_>, x: &Value) -> EvalResult {
    let items = x.to_items();
    let results = items
        .windows(2)
        .map(|pair| f(&pair[1], &pair[0]))
        .collect::<Result<_, _>>()?;
    Ok(collect(results, VectorTag::General))
}

#[cfg(test)]
mod tests;
