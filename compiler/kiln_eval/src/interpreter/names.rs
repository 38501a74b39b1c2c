//! Variable resolution and assignment.
//!
//! Lookup order for a name, first match wins:
//!
//! 1. A dotted name is a K-tree path: absolute with a leading `.`, otherwise
//!    relative to the current branch and then to the root.
//! 2. The name under the current branch.
//! 3. The name under the executing function's branch.
//! 4. The call frames, innermost first, then the global scope.
//! 5. System names: `_n` is null, `_d` the current branch, any other
//!    reserved name its own symbol.

use kiln_ir::{is_system_name, AssignScope, Assignment, Node, Verb};
use kiln_value::{undefined_variable, EvalError, EvalResult, Value};

use super::call::Callable;
use super::Interpreter;
use crate::ktree::{join, parent};

fn is_path(name: &str) -> bool {
    name.contains('.')
}

impl Interpreter {
    pub(crate) fn resolve(&self, name: &str) -> EvalResult {
        self.lookup(name).ok_or_else(|| undefined_variable(name))
    }

    /// Resolve `name`, or `None` when it is bound nowhere.
    pub(crate) fn lookup(&self, name: &str) -> Option<Value> {
        if is_path(name) {
            if name.starts_with('.') {
                return self.ktree.get(name).cloned();
            }
            return self
                .ktree
                .get(&self.ktree.relative(name))
                .or_else(|| self.ktree.get(&join(".", name)))
                .cloned();
        }
        if let Some(value) = self.ktree.get(&self.ktree.relative(name)) {
            return Some(value.clone());
        }
        if let Some(branch) = self.env.current_branch() {
            if let Some(value) = self.ktree.get(&join(branch, name)) {
                return Some(value.clone());
            }
        }
        if let Some(value) = self.env.lookup(name) {
            return Some(value.clone());
        }
        match name {
            "_n" => Some(Value::Null),
            "_d" => Some(Value::symbol(self.ktree.current_branch())),
            _ if is_system_name(name) => Some(Value::symbol(name)),
            _ => None,
        }
    }

    /// Absolute K-tree path written by an assignment to a dotted name.
    fn write_path(&self, name: &str) -> String {
        if name.starts_with('.') {
            name.to_string()
        } else {
            self.ktree.relative(name)
        }
    }

    /// Bind `value` to `name`.
    ///
    /// A dotted name writes the K-tree and a function stored there is tagged
    /// with the branch that holds it. Otherwise `:` binds in the current
    /// frame and `::` in the global scope.
    pub(crate) fn assign(&mut self, name: &str, scope: AssignScope, value: Value) {
        if is_path(name) {
            let path = self.write_path(name);
            let value = match value {
                Value::Function(f) => {
                    Value::Function(f.with_branch(Some(parent(&path).to_string())))
                }
                other => other,
            };
            self.ktree.set(&path, value);
            return;
        }
        match scope {
            AssignScope::Local => self.env.define_local(name, value),
            AssignScope::Global => self.env.define_global(name, value),
        }
    }

    /// `x:v`, `x::v`, `x+:v`, `x[i]:v` and `x[i]+:v`.
    ///
    /// Evaluates to the value bound to `x`, except for indexed forms, which
    /// evaluate to the right-hand side.
    pub(super) fn eval_assignment(&mut self, assignment: &Assignment, node: &Node) -> EvalResult {
        let Some((value, indices)) = node.children.split_first() else {
            return Ok(Value::Null);
        };
        let value = self.eval(value)?;
        let target = assignment.target.as_str();

        if indices.is_empty() {
            let bound = match assignment.modifier {
                None => value,
                Some(verb) => {
                    let current = self.resolve(target)?;
                    self.apply_dyadic(verb, &current, &value)?
                }
            };
            self.assign(target, assignment.scope, bound.clone());
            return Ok(bound);
        }

        let path = self.eval_path(indices)?;
        let current = self.lookup(target).unwrap_or(Value::Null);
        let update = Callable::Verb(assignment.modifier.unwrap_or(Verb::Colon));
        let amended = self.amend(current, &path, &update, Some(&value))?;
        self.assign(target, assignment.scope, amended);
        Ok(value)
    }

    /// Index expressions, right to left; an elided index selects everything.
    pub(super) fn eval_path(&mut self, indices: &[Node]) -> Result<Vec<Value>, EvalError> {
        let mut path = Vec::with_capacity(indices.len());
        for index in indices.iter().rev() {
            path.push(self.eval(index)?);
        }
        path.reverse();
        Ok(path)
    }
}
