//! The K-tree: a persistent namespace of nested dictionaries.
//!
//! Paths are dotted: `.` is the root, `.a.b` the entry `b` of the dictionary
//! at `.a`. The tree starts with `.k = _n` and `.t = 0`, and tracks a current
//! branch (`.k` unless configured otherwise) that unqualified names are also
//! resolved against.
//!
//! Writes create missing intermediate dictionaries. Writing through a
//! segment that holds something other than a dictionary replaces it.

use kiln_value::{Dictionary, Value};

/// Default current branch.
pub const DEFAULT_BRANCH: &str = ".k";

/// Namespace tree plus the current branch.
#[derive(Clone, Debug)]
pub struct KTree {
    root: Value,
    branch: String,
    initial_branch: String,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|s| !s.is_empty())
}

fn initial_root() -> Value {
    let mut root = Dictionary::new();
    root.insert("k", Value::Null);
    root.insert("t", Value::Int(0));
    Value::dictionary(root)
}

/// Join a branch and a name: `.a` + `b` is `.a.b`, `.` + `b` is `.b`.
pub fn join(branch: &str, name: &str) -> String {
    if branch.ends_with('.') {
        format!("{branch}{name}")
    } else {
        format!("{branch}.{name}")
    }
}

/// Path of the dictionary holding `path`: `.a.f` is in `.a`, `.f` in `.`.
pub fn parent(path: &str) -> &str {
    match path.rfind('.') {
        Some(0) | None => ".",
        Some(i) => &path[..i],
    }
}

impl KTree {
    pub fn new(initial_branch: &str) -> Self {
        let mut tree = KTree {
            root: initial_root(),
            branch: initial_branch.to_string(),
            initial_branch: initial_branch.to_string(),
        };
        tree.ensure_branch();
        tree
    }

    /// Back to the initial contents and branch.
    pub fn reset(&mut self) {
        self.root = initial_root();
        self.branch = self.initial_branch.clone();
        self.ensure_branch();
    }

    pub fn current_branch(&self) -> &str {
        &self.branch
    }

    /// Whether the current branch is the one the tree started with.
    pub fn at_initial_branch(&self) -> bool {
        self.branch == self.initial_branch
    }

    /// Change the current branch, creating its dictionary if needed.
    pub fn set_branch(&mut self, path: &str) {
        tracing::debug!(path, "set current branch");
        self.branch = if path.starts_with('.') {
            path.to_string()
        } else {
            join(".", path)
        };
        self.ensure_branch();
    }

    /// The default branch `.k` starts as `_n`; it only becomes a dictionary
    /// once something is written under it.
    fn ensure_branch(&mut self) {
        if self.branch == "." || self.branch == DEFAULT_BRANCH {
            return;
        }
        if self.get(&self.branch).and_then(Value::as_dictionary).is_none() {
            let branch = self.branch.clone();
            self.set(&branch, Value::dictionary(Dictionary::new()));
        }
    }

    /// Value at an absolute path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut node = &self.root;
        for segment in segments(path) {
            node = node.as_dictionary()?.get(segment)?;
        }
        Some(node)
    }

    /// Absolute path of `name` relative to the current branch.
    pub fn relative(&self, name: &str) -> String {
        join(&self.branch, name)
    }

    /// Write `value` at an absolute path.
    pub fn set(&mut self, path: &str, value: Value) {
        tracing::debug!(path, "K-tree write");
        let segments: Vec<&str> = segments(path).collect();
        if segments.is_empty() {
            if value.as_dictionary().is_some() {
                self.root = value;
            }
            return;
        }
        set_in(&mut self.root, &segments, value);
    }
}

impl Default for KTree {
    fn default() -> Self {
        KTree::new(DEFAULT_BRANCH)
    }
}

fn set_in(target: &mut Value, segments: &[&str], value: Value) {
    if target.as_dictionary().is_none() {
        *target = Value::dictionary(Dictionary::new());
    }
    let Some(dict) = target.as_dictionary_mut() else {
        return;
    };
    let [first, rest @ ..] = segments else {
        return;
    };
    if rest.is_empty() {
        dict.insert(first, value);
        return;
    }
    if !dict.contains_key(first) {
        dict.insert(first, Value::dictionary(Dictionary::new()));
    }
    if let Some(child) = dict.get_mut(first) {
        set_in(child, rest, value);
    }
}

#[cfg(test)]
mod tests;
