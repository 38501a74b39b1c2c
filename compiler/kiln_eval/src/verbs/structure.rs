//! Verbs that rearrange the elements of a vector: take, drop, cut, join,
//! flip, rotate and shape.

use kiln_value::{domain_error, index_out_of_bounds, length_error, EvalResult, Value, VectorTag};

use super::{checked_length, null_of};

/// `n#y`: `|n|` elements of `y` repeated cyclically, from the back when `n`
/// is negative. An atom is a one-element vector.
pub fn take(n: i64, y: &Value) -> EvalResult {
    let tag = y.element_tag();
    let count = checked_length(n.unsigned_abs(), "take")?;
    if count == 0 {
        return Ok(Value::empty(tag));
    }
    let items = y.to_items();
    if items.is_empty() {
        return Ok(Value::typed_vector(vec![null_of(tag); count], tag));
    }
    let len = items.len();
    let start = if n < 0 { (len - count % len) % len } else { 0 };
    let taken = (0..count).map(|i| items[(start + i) % len].clone()).collect();
    Ok(Value::typed_vector(taken, tag))
}

/// `dims#y`: nested vector of the given dimensions, filled cyclically from
/// the elements of `y`.
pub fn reshape(dims: &[usize], y: &Value) -> Value {
    let tag = y.element_tag();
    let items = y.to_items();
    let mut cursor = 0usize;
    build(dims, &items, tag, &mut cursor)
}

fn build(dims: &[usize], items: &[Value], tag: VectorTag, cursor: &mut usize) -> Value {
    let Some((&n, rest)) = dims.split_first() else {
        return Value::empty(tag);
    };
    if rest.is_empty() {
        let row = (0..n)
            .map(|_| {
                let item = if items.is_empty() {
                    null_of(tag)
                } else {
                    items[*cursor % items.len()].clone()
                };
                *cursor += 1;
                item
            })
            .collect();
        return Value::typed_vector(row, tag);
    }
    Value::vector((0..n).map(|_| build(rest, items, tag, cursor)).collect())
}

/// `n_y`: drop `n` elements from the front, or `-n` from the back.
pub fn drop(n: i64, y: &Value) -> Value {
    let tag = y.element_tag();
    let items = y.to_items();
    let count = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX).min(items.len());
    let kept = if n >= 0 {
        items[count..].to_vec()
    } else {
        items[..items.len() - count].to_vec()
    };
    Value::typed_vector(kept, tag)
}

/// `i_y`: cut `y` into pieces starting at each of the ascending indices `i`.
pub fn cut(indices: &[Value], y: &Value) -> EvalResult {
    let tag = y.element_tag();
    let items = y.to_items();
    let mut starts = Vec::with_capacity(indices.len());
    for index in indices {
        let Some(i) = index.as_i64() else {
            return Err(domain_error(format!("cannot cut at {}", index.type_name())));
        };
        let position = usize::try_from(i)
            .ok()
            .filter(|&p| p <= items.len())
            .ok_or_else(|| index_out_of_bounds(i))?;
        if starts.last().is_some_and(|&last| position < last) {
            return Err(domain_error("cut indices must be ascending"));
        }
        starts.push(position);
    }
    let pieces = starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(items.len());
            Value::typed_vector(items[start..end].to_vec(), tag)
        })
        .collect();
    Ok(Value::vector(pieces))
}

/// `x,y`: concatenation; dictionaries merge with `y` winning.
pub fn join(x: &Value, y: &Value) -> Value {
    if let (Value::Dictionary(a), Value::Dictionary(b)) = (x, y) {
        let mut merged = (**a).clone();
        for entry in b.entries() {
            merged.insert_with_attributes(&entry.key, entry.value.clone(), entry.attributes.clone());
        }
        return Value::dictionary(merged);
    }
    let tag = match x.element_tag() {
        VectorTag::General => y.element_tag(),
        tag => tag,
    };
    let mut items = x.to_items();
    items.extend(y.to_items());
    Value::typed_vector(items, tag)
}

/// `+x`: transpose a list of equal-length vectors. Atoms among the rows
/// are repeated; a list with no vector rows is returned unchanged.
pub fn flip(x: &Value) -> EvalResult {
    let Some(rows) = x.as_vector() else {
        return Ok(x.clone());
    };
    let Some(width) = rows.iter().find_map(Value::as_vector).map(<[Value]>::len) else {
        return Ok(x.clone());
    };
    for row in rows {
        if let Some(items) = row.as_vector() {
            if items.len() != width {
                return Err(length_error(width, items.len()));
            }
        }
    }
    let columns = (0..width)
        .map(|j| {
            Value::vector(
                rows.iter()
                    .map(|row| match row.as_vector() {
                        Some(items) => items[j].clone(),
                        None => row.clone(),
                    })
                    .collect(),
            )
        })
        .collect();
    Ok(Value::vector(columns))
}

/// `n!y`: rotate `y` left by `n`.
pub fn rotate(n: i64, y: &Value) -> Value {
    let tag = y.element_tag();
    let items = y.to_items();
    if items.is_empty() {
        return Value::empty(tag);
    }
    let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let shift = usize::try_from(n.rem_euclid(len)).unwrap_or(0);
    let mut rotated = items;
    rotated.rotate_left(shift);
    Value::typed_vector(rotated, tag)
}

/// `^x`: length of each dimension while the nesting is rectangular.
pub fn shape(x: &Value) -> Value {
    let Some(items) = x.as_vector() else {
        return Value::empty(VectorTag::Int);
    };
    let mut dims = vec![items.len()];
    let mut level: Vec<&Value> = items.iter().collect();
    loop {
        let Some(width) = level.first().and_then(|v| v.as_vector()).map(<[Value]>::len) else {
            break;
        };
        let uniform = level
            .iter()
            .all(|v| v.as_vector().is_some_and(|items| items.len() == width));
        if !uniform {
            break;
        }
        dims.push(width);
        level = level
            .iter()
            .filter_map(|v| v.as_vector())
            .flat_map(|items| items.iter())
            .collect();
    }
    Value::int_vector(dims.into_iter().map(|d| i32::try_from(d).unwrap_or(i32::MAX)))
}
