//! Verbs that search, sort and classify: grade, group, unique, find and
//! where.

use kiln_value::compare::{matches, order};
use kiln_value::{domain_error, rank_error, unary_type_error, EvalResult, Value, VectorTag};

use super::checked_length;

/// `<x` / `>x`: the permutation that sorts `x`.
///
/// The sort is stable in both directions: equal elements keep their
/// original relative order.
pub fn grade(x: &Value, descending: bool) -> EvalResult {
    let Some(items) = x.as_vector() else {
        return Err(rank_error(format!("cannot grade {}", x.type_name())));
    };
    let mut permutation: Vec<usize> = (0..items.len()).collect();
    if descending {
        permutation.sort_by(|&a, &b| order(&items[b], &items[a]));
    } else {
        permutation.sort_by(|&a, &b| order(&items[a], &items[b]));
    }
    Ok(index_vector(permutation))
}

fn index_vector(indices: impl IntoIterator<Item = usize>) -> Value {
    Value::int_vector(
        indices
            .into_iter()
            .map(|i| i32::try_from(i).unwrap_or(i32::MAX)),
    )
}

/// `=x`: the indices of each distinct value, in order of first appearance.
pub fn group(x: &Value) -> Value {
    let items = x.to_items();
    let mut groups: Vec<(&Value, Vec<usize>)> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match groups.iter_mut().find(|(key, _)| matches(key, item)) {
            Some((_, indices)) => indices.push(i),
            None => groups.push((item, vec![i])),
        }
    }
    Value::vector(
        groups
            .into_iter()
            .map(|(_, indices)| index_vector(indices))
            .collect(),
    )
}

/// `?x`: distinct elements in order of first appearance.
pub fn unique(x: &Value) -> Value {
    let tag = x.element_tag();
    let mut distinct: Vec<Value> = Vec::new();
    for item in x.to_items() {
        if !distinct.iter().any(|seen| matches(seen, &item)) {
            distinct.push(item);
        }
    }
    Value::typed_vector(distinct, tag)
}

/// `x?y`: index of the first element of `x` matching `y`, or `#x` when
/// there is none. A null `x` returns `y`.
pub fn find(x: &Value, y: &Value) -> Value {
    match x {
        Value::Null => y.clone(),
        Value::Dictionary(d) => d
            .entries()
            .iter()
            .find(|entry| matches(&entry.value, y))
            .map_or_else(|| Value::symbol(""), |entry| Value::symbol(&entry.key)),
        _ => {
            let items = x.to_items();
            let position = items
                .iter()
                .position(|item| matches(item, y))
                .unwrap_or(items.len());
            Value::from_usize(position)
        }
    }
}

/// `&x`: index `i` repeated `x[i]` times.
pub fn where_(x: &Value) -> EvalResult {
    let counts = match x {
        Value::Vector { items, .. } => items.to_vec(),
        atom => vec![atom.clone()],
    };
    let mut indices = Vec::new();
    let mut total = 0u64;
    for (i, count) in counts.iter().enumerate() {
        let Some(n) = count.as_i64() else {
            return Err(unary_type_error("where", count));
        };
        if n < 0 {
            return Err(domain_error(format!("where count {n} is negative")));
        }
        total = total.saturating_add(n.unsigned_abs());
        checked_length(total, "where")?;
        indices.extend(std::iter::repeat(i).take(usize::try_from(n).unwrap_or(0)));
    }
    if indices.is_empty() {
        return Ok(Value::empty(VectorTag::Int));
    }
    Ok(index_vector(indices))
}
