//! Runtime values for the kiln interpreter.
//!
//! # Heap Enforcement
//!
//! Heap-backed variants hold a [`Heap<T>`] whose constructor is private to
//! this module, so symbols, vectors and dictionaries are always created
//! through the factory methods on [`Value`]:
//!
//! ```text
//! let s = Value::symbol("a");              // OK
//! let v = Value::vector(vec![Value::Int(1)]);
//! let v = Value::Vector { items: Heap::new(..), .. }; // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Sentinels
//!
//! Each numeric type reserves three values: positive infinity, null and
//! negative infinity. For `Int` they are `i32::MAX`, `i32::MIN` and
//! `i32::MIN + 1` (`0I`, `0N`, `-0I`); `Long` uses the same pattern at 64
//! bits and `Float` uses IEEE `inf`, `NaN` and `-inf`.

mod dictionary;
mod function;
mod heap;

use std::sync::Arc;

pub use dictionary::{DictEntry, Dictionary};
pub use function::{FunctionDef, FunctionValue};
pub use heap::Heap;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f64),
    Char(u8),
    Symbol(Heap<str>),
    /// Ordered list. `tag` records what kind of vector produced it and is
    /// only observable when `items` is empty.
    Vector {
        items: Heap<Vec<Value>>,
        tag: VectorTag,
    },
    Function(FunctionValue),
    Null,
    Dictionary(Heap<Dictionary>),
}

/// Element kind a vector was created with.
///
/// Selects the display form and type code of an *empty* vector: `!0` is an
/// empty int vector, `0#"abc"` an empty string, `()` an empty general list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum VectorTag {
    #[default]
    General,
    Int,
    Long,
    Float,
    Char,
    Symbol,
}

impl VectorTag {
    /// Tag for a vector whose elements are all `value`'s type.
    pub fn of_atom(value: &Value) -> VectorTag {
        match value {
            Value::Int(_) => VectorTag::Int,
            Value::Long(_) => VectorTag::Long,
            Value::Float(_) => VectorTag::Float,
            Value::Char(_) => VectorTag::Char,
            Value::Symbol(_) => VectorTag::Symbol,
            _ => VectorTag::General,
        }
    }

    /// Tag describing `items`: the shared atom type, else `General`.
    pub fn infer(items: &[Value]) -> VectorTag {
        let Some(first) = items.first() else {
            return VectorTag::General;
        };
        let tag = VectorTag::of_atom(first);
        if tag != VectorTag::General && items.iter().all(|v| VectorTag::of_atom(v) == tag) {
            tag
        } else {
            VectorTag::General
        }
    }

    /// Type code of a uniform vector of this tag (negated atom code).
    pub fn type_code(self) -> i32 {
        match self {
            VectorTag::General => 0,
            VectorTag::Int => -1,
            VectorTag::Float => -2,
            VectorTag::Char => -3,
            VectorTag::Symbol => -4,
            VectorTag::Long => -8,
        }
    }
}

/// Type codes returned by `4:`.
pub mod type_code {
    pub const INT: i32 = 1;
    pub const FLOAT: i32 = 2;
    pub const CHAR: i32 = 3;
    pub const SYMBOL: i32 = 4;
    pub const DICTIONARY: i32 = 5;
    pub const NULL: i32 = 6;
    pub const FUNCTION: i32 = 7;
    pub const LONG: i32 = 8;
    pub const LIST: i32 = 0;
}

impl Value {
    pub const INT_INF: i32 = i32::MAX;
    pub const INT_NULL: i32 = i32::MIN;
    pub const INT_NEG_INF: i32 = i32::MIN + 1;
    pub const LONG_INF: i64 = i64::MAX;
    pub const LONG_NULL: i64 = i64::MIN;
    pub const LONG_NEG_INF: i64 = i64::MIN + 1;

    // Factory methods

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Heap::from_arc(Arc::from(name)))
    }

    /// Vector with its tag inferred from the items.
    pub fn vector(items: Vec<Value>) -> Self {
        let tag = VectorTag::infer(&items);
        Value::Vector {
            items: Heap::new(items),
            tag,
        }
    }

    /// Vector with an explicit tag for the empty case.
    ///
    /// A non-empty vector still gets the tag inferred from its items.
    pub fn typed_vector(items: Vec<Value>, empty_tag: VectorTag) -> Self {
        let tag = if items.is_empty() {
            empty_tag
        } else {
            VectorTag::infer(&items)
        };
        Value::Vector {
            items: Heap::new(items),
            tag,
        }
    }

    /// Empty vector of the given kind.
    pub fn empty(tag: VectorTag) -> Self {
        Value::typed_vector(Vec::new(), tag)
    }

    /// Character vector.
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        let items = bytes.as_ref().iter().copied().map(Value::Char).collect();
        Value::typed_vector(items, VectorTag::Char)
    }

    pub fn int_vector(items: impl IntoIterator<Item = i32>) -> Self {
        let items = items.into_iter().map(Value::Int).collect();
        Value::typed_vector(items, VectorTag::Int)
    }

    pub fn dictionary(dict: Dictionary) -> Self {
        Value::Dictionary(Heap::new(dict))
    }

    /// `Int` from a count or index, saturating below the `0I` sentinel.
    pub fn from_usize(n: usize) -> Self {
        Value::Int(i32::try_from(n).unwrap_or(Value::INT_INF - 1))
    }

    // Inspection

    /// Type code as returned by `4:`.
    pub fn type_code(&self) -> i32 {
        match self {
            Value::Int(_) => type_code::INT,
            Value::Long(_) => type_code::LONG,
            Value::Float(_) => type_code::FLOAT,
            Value::Char(_) => type_code::CHAR,
            Value::Symbol(_) => type_code::SYMBOL,
            Value::Dictionary(_) => type_code::DICTIONARY,
            Value::Null => type_code::NULL,
            Value::Function(_) => type_code::FUNCTION,
            Value::Vector { items, tag } => {
                if items.is_empty() {
                    tag.type_code()
                } else {
                    VectorTag::infer(items).type_code()
                }
            }
        }
    }

    /// Short type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Symbol(_) => "symbol",
            Value::Vector { .. } => "list",
            Value::Function(_) => "function",
            Value::Null => "null",
            Value::Dictionary(_) => "dictionary",
        }
    }

    pub fn is_atom(&self) -> bool {
        !matches!(self, Value::Vector { .. })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Long(_) | Value::Float(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Items of a vector.
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Mutable items of a vector, copied first if shared.
    pub fn as_vector_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Vector { items, .. } => Some(items.make_mut()),
            _ => None,
        }
    }

    pub fn vector_tag(&self) -> Option<VectorTag> {
        match self {
            Value::Vector { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Tag for a vector built from this value's elements: the vector's own
    /// tag, or the atom's type.
    pub fn element_tag(&self) -> VectorTag {
        match self {
            Value::Vector { items, tag } if items.is_empty() => *tag,
            Value::Vector { items, .. } => VectorTag::infer(items),
            atom => VectorTag::of_atom(atom),
        }
    }

    /// Elements of a vector, or the value itself as a one-element list.
    pub fn to_items(&self) -> Vec<Value> {
        match self {
            Value::Vector { items, .. } => items.to_vec(),
            atom => vec![atom.clone()],
        }
    }

    /// `#x`: vector length, dictionary size, 1 for any other atom.
    pub fn count(&self) -> usize {
        match self {
            Value::Vector { items, .. } => items.len(),
            Value::Dictionary(d) => d.len(),
            _ => 1,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dictionary_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d.make_mut()),
            _ => None,
        }
    }

    /// Integer value of an `Int` or `Long` atom.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i64::from(i)),
            Value::Long(i) => Some(i),
            _ => None,
        }
    }

    /// Bytes of a character vector (or a single character).
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Value::Char(c) => Some(vec![*c]),
            Value::Vector { items, tag } => {
                if items.is_empty() {
                    return (*tag == VectorTag::Char || *tag == VectorTag::General)
                        .then(Vec::new);
                }
                items
                    .iter()
                    .map(|v| match v {
                        Value::Char(c) => Some(*c),
                        _ => None,
                    })
                    .collect()
            }
            _ => None,
        }
    }

    /// Condition truthiness: a non-zero number or character.
    pub fn is_truthy(&self) -> bool {
        match *self {
            Value::Int(i) => i != 0,
            Value::Long(i) => i != 0,
            Value::Float(f) => f != 0.0,
            Value::Char(c) => c != 0,
            _ => false,
        }
    }
}

/// Exact structural equality, used by tests and the codec. Language-level
/// comparison lives in [`crate::compare`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Vector { items: a, tag: ta }, Value::Vector { items: b, tag: tb }) => {
                a == b && (!a.is_empty() || ta == tb)
            }
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Dictionary(a), Value::Dictionary(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
