//! Tree-walking interpreter for kiln.
//!
//! # Architecture
//!
//! [`Interpreter::eval`] dispatches on [`NodeKind`]. Helper modules split the
//! work the same way the node kinds do:
//!
//! - `names` - variable resolution and assignment (scope chain and K-tree)
//! - `call` - function calls, verb application and projection
//! - `control` - control words, trapped apply and amend
//! - `derived` - applying a verb modified by an adverb
//!
//! # Evaluation order
//!
//! Operands are evaluated right to left: the right argument of a dyadic verb
//! before the left, the last bracket argument before the first and the last
//! list item before the first. Statements of a block run left to right.

mod builder;
mod call;
mod control;
mod derived;
mod names;
mod scope_guard;

pub use builder::{InterpreterBuilder, InterpreterConfig, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

use kiln_ir::{Literal, Node, NodeKind, Operator, Verb};
use kiln_stack::ensure_sufficient_stack;
use kiln_value::{not_supported, parse_error, EvalResult, FunctionValue, Value};

use crate::ktree::KTree;
use crate::Environment;

/// Tree-walking interpreter.
///
/// One interpreter owns one K-tree and one global scope; both persist across
/// calls to [`Interpreter::eval`] and [`Interpreter::eval_source`].
#[derive(Debug)]
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) ktree: KTree,
    config: InterpreterConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// Interpreter with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn ktree(&self) -> &KTree {
        &self.ktree
    }

    pub fn ktree_mut(&mut self) -> &mut KTree {
        &mut self.ktree
    }

    /// Evaluate one node.
    ///
    /// Errors carry the span of the innermost node that raised them.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node)).map_err(|e| e.with_span(node.span))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        tracing::trace!(span = %node.span, kind = ?std::mem::discriminant(&node.kind), "eval");
        match &node.kind {
            NodeKind::Literal(literal) => Ok(literal_value(literal)),
            NodeKind::Variable(name) => self.resolve(name),
            NodeKind::Assignment(assignment) => self.eval_assignment(assignment, node),
            NodeKind::BinaryOp(Operator::Verb(verb)) => self.eval_verb(*verb, &node.children),
            NodeKind::BinaryOp(Operator::Adverb(adverb)) => {
                self.eval_derived(*adverb, &node.children)
            }
            NodeKind::Vector => {
                let mut items = Vec::with_capacity(node.children.len());
                for child in node.children.iter().rev() {
                    items.push(self.eval(child)?);
                }
                items.reverse();
                Ok(Value::vector(items))
            }
            NodeKind::Function(literal) => {
                let function = FunctionValue::from_literal(literal);
                let function = if self.ktree.at_initial_branch() {
                    function
                } else {
                    function.with_branch(Some(self.ktree.current_branch().to_string()))
                };
                Ok(Value::Function(function))
            }
            NodeKind::FunctionCall => self.eval_call(node),
            NodeKind::Block => self.eval_block(&node.children),
            NodeKind::Empty => Ok(Value::Null),
        }
    }

    /// Statements in order; the value of the last one.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> EvalResult {
        let mut result = Value::Null;
        for statement in statements {
            result = self.eval(statement)?;
        }
        Ok(result)
    }

    fn eval_verb(&mut self, verb: Verb, operands: &[Node]) -> EvalResult {
        match operands {
            // A verb standing alone is its symbol: `f:+` then `f[1;2]`.
            [] => Ok(Value::symbol(verb.glyph())),
            [x] => {
                let x = self.eval(x)?;
                self.apply_monadic(verb, &x)
            }
            [x, y] => {
                let y = self.eval(y)?;
                let x = self.eval(x)?;
                self.apply_dyadic(verb, &x, &y)
            }
            _ => Err(not_supported(format!("{verb} with {} operands", operands.len()))),
        }
    }

    /// Parse and evaluate source text.
    ///
    /// A line starting with `\` is a system command rather than an
    /// expression: `\d` returns the current branch and `\d .a` changes it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn eval_source(&mut self, source: &str) -> EvalResult {
        let mut result = Value::Null;
        let mut chunk = String::new();
        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('\\') {
                if !chunk.trim().is_empty() {
                    self.eval_text(&chunk)?;
                    chunk.clear();
                }
                result = self.system_command(trimmed)?;
            } else {
                chunk.push_str(line);
                chunk.push('\n');
            }
        }
        if !chunk.trim().is_empty() {
            result = self.eval_text(&chunk)?;
        }
        Ok(result)
    }

    /// Parse `text` and evaluate it in the current scope.
    pub(crate) fn eval_text(&mut self, text: &str) -> EvalResult {
        let node = kiln_parse::parse(text).map_err(|e| parse_error(e.to_string()))?;
        self.eval(&node)
    }

    fn system_command(&mut self, line: &str) -> EvalResult {
        let mut words = line.trim_start_matches('\\').split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("d"), None, None) => Ok(Value::symbol(self.ktree.current_branch())),
            (Some("d"), Some(path), None) => {
                self.ktree.set_branch(path);
                Ok(Value::Null)
            }
            _ => Err(not_supported(format!("system command {line}"))),
        }
    }
}

/// Runtime value of a literal.
fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Int(i) => Value::Int(*i),
        Literal::Long(i) => Value::Long(*i),
        Literal::Float(f) => Value::Float(*f),
        Literal::Char(c) => Value::Char(*c),
        Literal::Symbol(name) => Value::symbol(name),
        Literal::Str(bytes) => Value::string(bytes),
        Literal::Vector(items) => Value::vector(items.iter().map(literal_value).collect()),
    }
}
