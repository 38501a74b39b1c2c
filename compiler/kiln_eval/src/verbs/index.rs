//! Indexing lists and dictionaries, and converting dictionaries to and
//! from `(key;value;attributes)` triples.

use kiln_value::{
    index_out_of_bounds, key_not_found, type_error, Dictionary, EvalResult, Value,
};

/// `x@i` / `x[i]`: one level of indexing. A vector index selects several
/// elements; a null index selects everything.
pub fn index(x: &Value, i: &Value) -> EvalResult {
    if i.is_null() {
        return Ok(x.clone());
    }
    match (x, i) {
        (_, Value::Vector { items: indices, .. }) => {
            let picked = indices
                .iter()
                .map(|i| index(x, i))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::typed_vector(picked, x.element_tag()))
        }
        (Value::Vector { items, .. }, _) => {
            let Some(n) = i.as_i64() else {
                return Err(type_error(format!("cannot index a list with {}", i.type_name())));
            };
            usize::try_from(n)
                .ok()
                .and_then(|n| items.get(n))
                .cloned()
                .ok_or_else(|| index_out_of_bounds(n))
        }
        (Value::Dictionary(d), Value::Symbol(key)) => {
            d.get(key).cloned().ok_or_else(|| key_not_found(key))
        }
        (Value::Dictionary(_), _) => Err(type_error(format!(
            "cannot index a dictionary with {}",
            i.type_name()
        ))),
        _ => Err(type_error(format!("cannot index {}", x.type_name()))),
    }
}

/// `x . path` / `x[i;j]`: index one level per path element. A null level
/// selects every element of that level.
pub fn index_path(x: &Value, path: &[Value]) -> EvalResult {
    let Some((first, rest)) = path.split_first() else {
        return Ok(x.clone());
    };
    if rest.is_empty() {
        return index(x, first);
    }
    if first.is_null() {
        let items = match x {
            Value::Dictionary(d) => d.values().cloned().collect(),
            _ => x.to_items(),
        };
        let picked = items
            .iter()
            .map(|item| index_path(item, rest))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::vector(picked));
    }
    let selected = index(x, first)?;
    if first.is_atom() {
        return index_path(&selected, rest);
    }
    let picked = selected
        .to_items()
        .iter()
        .map(|item| index_path(item, rest))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::vector(picked))
}

/// Arguments of `x . y` as a path: the items of `y`, or `y` itself.
pub fn path_items(y: &Value) -> Vec<Value> {
    match y {
        Value::Vector { .. } => y.to_items(),
        atom => vec![atom.clone()],
    }
}

/// `.d`: one `(key;value;attributes)` triple per entry.
pub fn dictionary_triples(x: &Value) -> Value {
    let Some(d) = x.as_dictionary() else {
        return x.clone();
    };
    Value::vector(
        d.entries()
            .iter()
            .map(|entry| {
                Value::vector(vec![
                    Value::symbol(&entry.key),
                    entry.value.clone(),
                    entry
                        .attributes
                        .clone()
                        .map_or(Value::Null, Value::dictionary),
                ])
            })
            .collect(),
    )
}

/// `.(triples)`: dictionary from `(key;value)` or `(key;value;attributes)`
/// lists.
pub fn dictionary_from_triples(x: &Value) -> EvalResult {
    let mut dict = Dictionary::new();
    for triple in x.to_items() {
        let parts = triple.to_items();
        let (key, value, attributes) = match parts.as_slice() {
            [Value::Symbol(key), value] => (key.clone(), value.clone(), None),
            [Value::Symbol(key), value, attributes] => {
                (key.clone(), value.clone(), attributes.as_dictionary().cloned())
            }
            _ => {
                return Err(type_error(
                    "dictionary entries must be (`key;value) or (`key;value;attributes)",
                ))
            }
        };
        dict.insert_with_attributes(&key, value, attributes);
    }
    Ok(Value::dictionary(dict))
}
