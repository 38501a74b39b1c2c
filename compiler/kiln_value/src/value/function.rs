//! Function values and projections.

use std::sync::{Arc, OnceLock};

use kiln_ir::{FunctionLiteral, Node};

use super::Value;

/// The shared part of a function: parameters, source text and parsed body.
///
/// The body cache is filled at most once. Every `FunctionValue` cloned from
/// the same definition sees the same cached body; a definition built again
/// from the same text does not.
#[derive(Debug)]
pub struct FunctionDef {
    params: Vec<String>,
    source: String,
    body: OnceLock<Arc<Node>>,
}

impl FunctionDef {
    pub fn new(params: Vec<String>, source: String, body: Option<Arc<Node>>) -> Self {
        let cell = OnceLock::new();
        if let Some(body) = body {
            let _ = cell.set(body);
        }
        FunctionDef {
            params,
            source,
            body: cell,
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Full source text, braces included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn cached_body(&self) -> Option<&Arc<Node>> {
        self.body.get()
    }

    /// Store a freshly parsed body, returning whichever body won.
    pub fn cache_body(&self, body: Arc<Node>) -> &Arc<Node> {
        self.body.get_or_init(|| body)
    }
}

/// A callable function value, possibly a projection.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    def: Arc<FunctionDef>,
    /// K-tree branch the function was defined in, used for name lookup.
    branch: Option<String>,
    /// Projection frame: one slot per parameter, or empty when nothing is
    /// bound.
    bound: Vec<Option<Value>>,
}

impl FunctionValue {
    pub fn new(def: FunctionDef) -> Self {
        FunctionValue {
            def: Arc::new(def),
            branch: None,
            bound: Vec::new(),
        }
    }

    pub fn from_literal(literal: &FunctionLiteral) -> Self {
        FunctionValue::new(FunctionDef::new(
            literal.params.clone(),
            literal.source.clone(),
            literal.body.clone(),
        ))
    }

    pub fn def(&self) -> &FunctionDef {
        &self.def
    }

    pub fn params(&self) -> &[String] {
        self.def.params()
    }

    pub fn source(&self) -> &str {
        self.def.source()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn is_projection(&self) -> bool {
        self.bound.iter().any(Option::is_some)
    }

    /// Bound slots, one per parameter (empty when not a projection).
    pub fn bound(&self) -> &[Option<Value>] {
        &self.bound
    }

    /// Number of arguments still needed.
    pub fn valence(&self) -> usize {
        if self.bound.is_empty() {
            self.def.params.len()
        } else {
            self.bound.iter().filter(|slot| slot.is_none()).count()
        }
    }

    /// Fill the free parameter slots in order with `args`; `None` leaves a
    /// slot free. Returns the slot vector, one entry per parameter.
    ///
    /// `args.len()` must not exceed [`FunctionValue::valence`].
    pub fn fill(&self, args: Vec<Option<Value>>) -> Vec<Option<Value>> {
        let mut slots = if self.bound.is_empty() {
            vec![None; self.def.params.len()]
        } else {
            self.bound.clone()
        };
        let mut args = args.into_iter();
        for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
            match args.next() {
                Some(arg) => *slot = arg,
                None => break,
            }
        }
        slots
    }

    /// A projection sharing this function's definition and branch.
    #[must_use]
    pub fn project(&self, slots: Vec<Option<Value>>) -> Self {
        FunctionValue {
            def: Arc::clone(&self.def),
            branch: self.branch.clone(),
            bound: slots,
        }
    }

    /// Whether both values share one definition (and so one body cache).
    pub fn same_definition(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        (self.same_definition(other) || self.def.source == other.def.source)
            && self.def.params == other.def.params
            && self.branch == other.branch
            && self.bound == other.bound
    }
}
