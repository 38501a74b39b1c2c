//! Insertion-ordered dictionaries keyed by symbol.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Heap, Value};

/// One dictionary entry: key, value and optional attribute dictionary.
#[derive(Clone, Debug, PartialEq)]
pub struct DictEntry {
    pub key: Heap<str>,
    pub value: Value,
    pub attributes: Option<Dictionary>,
}

/// Mapping from symbol to value that never reorders its entries.
///
/// Re-assigning an existing key replaces the value in place.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    index: FxHashMap<Heap<str>, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entry(key).map(|e| &e.value)
    }

    pub fn entry(&self, key: &str) -> Option<&DictEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let i = *self.index.get(key)?;
        Some(&mut self.entries[i].value)
    }

    /// Insert or replace, keeping the position of an existing key.
    pub fn insert(&mut self, key: &str, value: Value) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].value = value;
            return;
        }
        self.push_entry(key, value, None);
    }

    /// Insert with an attribute dictionary, replacing both if the key exists.
    pub fn insert_with_attributes(&mut self, key: &str, value: Value, attributes: Option<Dictionary>) {
        if let Some(&i) = self.index.get(key) {
            let entry = &mut self.entries[i];
            entry.value = value;
            entry.attributes = attributes;
            return;
        }
        self.push_entry(key, value, attributes);
    }

    fn push_entry(&mut self, key: &str, value: Value, attributes: Option<Dictionary>) {
        let key = Heap::from_arc(Arc::<str>::from(key));
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(DictEntry {
            key,
            value,
            attributes,
        });
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| &*e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.value)
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(String, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.insert(&key, value);
        }
        dict
    }
}
