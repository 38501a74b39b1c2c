//! Binary form of values, used by `_bd` (value to bytes) and `_db` (bytes
//! to value).
//!
//! Values are mirrored into a serde-derived wire enum and encoded with
//! bincode. Functions travel as source text: a decoded function has no
//! parsed body and is parsed the first time it is called.

use serde::{Deserialize, Serialize};

use kiln_value::{
    domain_error, Dictionary, EvalError, EvalResult, FunctionDef, FunctionValue, Value, VectorTag,
};

#[derive(Serialize, Deserialize)]
enum Wire {
    Int(i32),
    Long(i64),
    Float(f64),
    Char(u8),
    Symbol(String),
    Vector { items: Vec<Wire>, tag: WireTag },
    Function {
        params: Vec<String>,
        source: String,
        branch: Option<String>,
        bound: Vec<Option<Wire>>,
    },
    Null,
    Dictionary(Vec<WireEntry>),
}

#[derive(Serialize, Deserialize)]
struct WireEntry {
    key: String,
    value: Wire,
    attributes: Option<Vec<WireEntry>>,
}

#[derive(Serialize, Deserialize)]
enum WireTag {
    General,
    Int,
    Long,
    Float,
    Char,
    Symbol,
}

impl From<VectorTag> for WireTag {
    fn from(tag: VectorTag) -> Self {
        match tag {
            VectorTag::General => WireTag::General,
            VectorTag::Int => WireTag::Int,
            VectorTag::Long => WireTag::Long,
            VectorTag::Float => WireTag::Float,
            VectorTag::Char => WireTag::Char,
            VectorTag::Symbol => WireTag::Symbol,
        }
    }
}

impl From<WireTag> for VectorTag {
    fn from(tag: WireTag) -> Self {
        match tag {
            WireTag::General => VectorTag::General,
            WireTag::Int => VectorTag::Int,
            WireTag::Long => VectorTag::Long,
            WireTag::Float => VectorTag::Float,
            WireTag::Char => VectorTag::Char,
            WireTag::Symbol => VectorTag::Symbol,
        }
    }
}

fn to_wire(value: &Value) -> Wire {
    match value {
        Value::Int(i) => Wire::Int(*i),
        Value::Long(i) => Wire::Long(*i),
        Value::Float(x) => Wire::Float(*x),
        Value::Char(c) => Wire::Char(*c),
        Value::Symbol(s) => Wire::Symbol(String::from(&**s)),
        Value::Vector { items, tag } => Wire::Vector {
            items: items.iter().map(to_wire).collect(),
            tag: (*tag).into(),
        },
        Value::Function(f) => Wire::Function {
            params: f.params().to_vec(),
            source: f.source().to_string(),
            branch: f.branch().map(str::to_string),
            bound: f.bound().iter().map(|slot| slot.as_ref().map(to_wire)).collect(),
        },
        Value::Null => Wire::Null,
        Value::Dictionary(dict) => Wire::Dictionary(dict_to_wire(dict)),
    }
}

fn dict_to_wire(dict: &Dictionary) -> Vec<WireEntry> {
    dict.entries()
        .iter()
        .map(|entry| WireEntry {
            key: String::from(&*entry.key),
            value: to_wire(&entry.value),
            attributes: entry.attributes.as_ref().map(dict_to_wire),
        })
        .collect()
}

fn from_wire(wire: Wire) -> Value {
    match wire {
        Wire::Int(i) => Value::Int(i),
        Wire::Long(i) => Value::Long(i),
        Wire::Float(x) => Value::Float(x),
        Wire::Char(c) => Value::Char(c),
        Wire::Symbol(s) => Value::symbol(&s),
        Wire::Vector { items, tag } => {
            Value::typed_vector(items.into_iter().map(from_wire).collect(), tag.into())
        }
        Wire::Function {
            params,
            source,
            branch,
            bound,
        } => {
            let function =
                FunctionValue::new(FunctionDef::new(params, source, None)).with_branch(branch);
            if bound.is_empty() {
                Value::Function(function)
            } else {
                let slots = bound.into_iter().map(|slot| slot.map(from_wire)).collect();
                Value::Function(function.project(slots))
            }
        }
        Wire::Null => Value::Null,
        Wire::Dictionary(entries) => Value::dictionary(dict_from_wire(entries)),
    }
}

fn dict_from_wire(entries: Vec<WireEntry>) -> Dictionary {
    let mut dict = Dictionary::new();
    for entry in entries {
        let attributes = entry.attributes.map(dict_from_wire);
        dict.insert_with_attributes(&entry.key, from_wire(entry.value), attributes);
    }
    dict
}

/// Encode a value.
pub fn serialize(value: &Value) -> Result<Vec<u8>, EvalError> {
    bincode::serialize(&to_wire(value)).map_err(|e| domain_error(format!("cannot serialize: {e}")))
}

/// Decode bytes produced by [`serialize`].
pub fn deserialize(bytes: &[u8]) -> EvalResult {
    let wire: Wire =
        bincode::deserialize(bytes).map_err(|e| domain_error(format!("cannot deserialize: {e}")))?;
    Ok(from_wire(wire))
}

#[cfg(test)]
mod tests;
