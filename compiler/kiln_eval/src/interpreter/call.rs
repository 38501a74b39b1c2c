//! Function calls, verb application and projection.
//!
//! Anything that can stand in call position is first turned into a
//! [`Callable`], then applied to a list of arguments in which `None` marks
//! an elided argument (`f[;2]`). Elided or missing arguments make a
//! projection: a function value holding the bound arguments in its slots,
//! resolved again when the remaining arguments arrive.

use std::sync::Arc;

use kiln_ir::{is_system_name, Adverb, Node, NodeKind, Operator, Verb};
use kiln_parse::parse_function;
use kiln_stack::ensure_sufficient_stack;
use kiln_value::{
    arity_error, not_supported, parse_deferred, parse_error, stack_overflow, type_error,
    EvalError, EvalResult, FunctionValue, Value, VectorTag,
};

use super::Interpreter;
use crate::environment::Frame;
use crate::{system, verbs};

/// Something in call position.
#[derive(Clone, Debug)]
pub(crate) enum Callable {
    /// A primitive verb.
    Verb(Verb),
    /// A verb, function or derived verb modified by an adverb.
    Derived(Adverb, Box<Callable>),
    /// Any value: functions, system names, and lists or dictionaries
    /// (applying those indexes them).
    Value(Value),
}

impl Callable {
    /// Wrap a value, recognising symbols that name a verb (`f:+`).
    pub(crate) fn from_value(value: Value) -> Callable {
        if let Some(verb) = value.as_symbol().and_then(Verb::from_glyph) {
            return Callable::Verb(verb);
        }
        Callable::Value(value)
    }

    /// Number of arguments a plain application expects.
    pub(crate) fn valence(&self) -> usize {
        match self {
            Callable::Verb(_) => 2,
            Callable::Derived(adverb, _) => {
                if adverb.derives_monadic() {
                    1
                } else {
                    2
                }
            }
            Callable::Value(Value::Function(f)) => f.valence(),
            Callable::Value(_) => 1,
        }
    }

    /// The primitive verb behind this callable, if it is one.
    pub(crate) fn as_verb(&self) -> Option<Verb> {
        match self {
            Callable::Verb(verb) => Some(*verb),
            _ => None,
        }
    }
}

/// Whether applying `value` calls something rather than indexing it.
pub(crate) fn is_applicable(value: &Value) -> bool {
    match value {
        Value::Function(_) => true,
        Value::Symbol(name) => Verb::from_glyph(name).is_some() || is_system_name(name),
        _ => false,
    }
}

/// `{[x;y] x+y}`: the function equivalent of a dyadic verb, used to
/// project a verb over one of its arguments.
fn verb_function(verb: Verb) -> Result<FunctionValue, EvalError> {
    let source = format!("{{[x;y] x {} y}}", verb.glyph());
    let literal = parse_function(&source).map_err(|e| parse_error(e.to_string()))?;
    Ok(FunctionValue::from_literal(&literal))
}

impl Interpreter {
    /// `f[a;b]`, `f x`, `+[1;2]`, control words and the bracket forms of
    /// `@` and `.`.
    pub(super) fn eval_call(&mut self, node: &Node) -> EvalResult {
        let Some((callee, args)) = node.children.split_first() else {
            return Ok(Value::Null);
        };

        if let Some(word) = callee.as_variable() {
            if let Some(result) = self.eval_control_word(word, args) {
                return result;
            }
        }
        if let NodeKind::BinaryOp(Operator::Verb(verb)) = callee.kind {
            if callee.is_unapplied() {
                match verb {
                    Verb::Colon => return self.eval_conditional(args),
                    Verb::At | Verb::Dot if is_trap(args) => {
                        return self.eval_trap(verb, &args[0], &args[1]);
                    }
                    Verb::At | Verb::Dot if args.len() == 3 || args.len() == 4 => {
                        return self.eval_amend(verb, args);
                    }
                    _ => {}
                }
            }
        }

        let args = self.eval_args(args)?;
        let callable = self.eval_callable(callee)?;
        self.apply_callable(&callable, args)
    }

    /// Bracket arguments, right to left. An elided argument is `None`.
    pub(super) fn eval_args(&mut self, args: &[Node]) -> Result<Vec<Option<Value>>, EvalError> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args.iter().rev() {
            values.push(if arg.is_empty() {
                None
            } else {
                Some(self.eval(arg)?)
            });
        }
        values.reverse();
        Ok(values)
    }

    /// Evaluate a node in call position.
    pub(crate) fn eval_callable(&mut self, node: &Node) -> Result<Callable, EvalError> {
        match node.kind {
            NodeKind::BinaryOp(Operator::Verb(verb)) if node.is_unapplied() => {
                Ok(Callable::Verb(verb))
            }
            NodeKind::BinaryOp(Operator::Adverb(adverb)) if node.is_unapplied() => {
                let operand = self.eval_callable(&node.children[0])?;
                Ok(Callable::Derived(adverb, Box::new(operand)))
            }
            _ => Ok(Callable::from_value(self.eval(node)?)),
        }
    }

    /// Apply a callable to arguments, projecting over elided ones.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn apply_callable(
        &mut self,
        callable: &Callable,
        args: Vec<Option<Value>>,
    ) -> EvalResult {
        match callable {
            Callable::Verb(verb) => self.apply_verb(*verb, args),
            Callable::Derived(adverb, operand) => {
                let Some(args) = args.into_iter().collect::<Option<Vec<_>>>() else {
                    return Err(not_supported(format!("projection of a derived verb {adverb}")));
                };
                self.apply_derived(*adverb, operand, args)
            }
            Callable::Value(value) => self.apply_value(value, args),
        }
    }

    /// Apply a callable to arguments that are all present.
    pub(crate) fn call(&mut self, callable: &Callable, args: &[&Value]) -> EvalResult {
        let args = args.iter().map(|&arg| Some(arg.clone())).collect();
        self.apply_callable(callable, args)
    }

    fn apply_verb(&mut self, verb: Verb, args: Vec<Option<Value>>) -> EvalResult {
        if args.len() > 2 {
            return Err(arity_error(2, args.len()));
        }
        if args.iter().any(Option::is_none) {
            let function = verb_function(verb)?;
            return self.call_function(&function, args);
        }
        match args.as_slice() {
            [Some(x), Some(y)] => self.apply_dyadic(verb, x, y),
            [Some(x)] => self.apply_monadic(verb, x),
            _ => self.apply_monadic(verb, &Value::Null),
        }
    }

    /// Monadic verb application. `.` on a string executes it.
    pub(crate) fn apply_monadic(&mut self, verb: Verb, x: &Value) -> EvalResult {
        let is_text = matches!(x, Value::Char(_)) || x.vector_tag() == Some(VectorTag::Char);
        if verb == Verb::Dot && is_text {
            let text = x.as_bytes().unwrap_or_default();
            return self.eval_text(&String::from_utf8_lossy(&text));
        }
        verbs::monadic(verb, x)
    }

    /// Dyadic verb application. `f@x` and `f . args` call `f`.
    pub(crate) fn apply_dyadic(&mut self, verb: Verb, x: &Value, y: &Value) -> EvalResult {
        match verb {
            Verb::At if is_applicable(x) => self.apply_value(x, vec![Some(y.clone())]),
            Verb::Dot if is_applicable(x) => {
                let args = verbs::path_items(y).into_iter().map(Some).collect();
                self.apply_value(x, args)
            }
            _ => verbs::dyadic(verb, x, y),
        }
    }

    /// Apply a value: call a function, a verb or system name given by its
    /// symbol, or index a list or dictionary.
    pub(crate) fn apply_value(&mut self, value: &Value, args: Vec<Option<Value>>) -> EvalResult {
        match value {
            Value::Function(f) => self.call_function(f, args),
            Value::Symbol(name) => {
                if let Some(verb) = Verb::from_glyph(name) {
                    return self.apply_verb(verb, args);
                }
                if is_system_name(name) {
                    return match args.as_slice() {
                        [Some(x)] => system::call(name, x),
                        _ => Err(arity_error(1, args.len())),
                    };
                }
                Err(type_error(format!("cannot apply symbol `{}", &**name)))
            }
            Value::Vector { .. } | Value::Dictionary(_) => {
                let path: Vec<Value> = args
                    .into_iter()
                    .map(|arg| arg.unwrap_or(Value::Null))
                    .collect();
                verbs::index_path(value, &path)
            }
            other => Err(type_error(format!("cannot apply {}", other.type_name()))),
        }
    }

    /// Call a function value.
    ///
    /// No arguments means one null argument. A single list of more than one
    /// element spreads over a function that takes several arguments. Fewer
    /// arguments than the valence, or any elided argument, projects.
    #[tracing::instrument(level = "trace", skip_all, fields(source = f.source()))]
    pub(crate) fn call_function(
        &mut self,
        f: &FunctionValue,
        mut args: Vec<Option<Value>>,
    ) -> EvalResult {
        let valence = f.valence();
        if args.is_empty() {
            if valence == 0 {
                return self.invoke(f, Vec::new());
            }
            args.push(Some(Value::Null));
        }
        if args.len() == 1 && valence > 1 {
            let spread = match &args[0] {
                Some(Value::Vector { items, .. }) if items.len() > 1 => Some(items.to_vec()),
                _ => None,
            };
            if let Some(items) = spread {
                args = items.into_iter().map(Some).collect();
            }
        }
        if args.len() > valence {
            return Err(arity_error(valence, args.len()));
        }
        if args.len() < valence || args.iter().any(Option::is_none) {
            let projection = f.project(f.fill(args));
            tracing::debug!(remaining = projection.valence(), "projection");
            return Ok(Value::Function(projection));
        }
        let args = args.into_iter().flatten().collect();
        self.invoke(f, args)
    }

    /// Run the body of `f` with every parameter bound.
    fn invoke(&mut self, f: &FunctionValue, args: Vec<Value>) -> EvalResult {
        self.check_call_depth()?;
        let body = self.function_body(f)?;

        let mut frame = Frame::new(f.branch().map(str::to_string));
        let slots = f.fill(args.into_iter().map(Some).collect());
        for (param, slot) in f.params().iter().zip(slots) {
            frame.define(param, slot.unwrap_or(Value::Null));
        }

        let mut scoped = self.scoped(frame);
        ensure_sufficient_stack(|| {
            if body.is_empty() {
                Ok(Value::Int(0))
            } else {
                scoped.eval(&body)
            }
        })
    }

    /// Raise `StackOverflow` once the call depth reaches the configured
    /// limit.
    #[inline]
    pub(crate) fn check_call_depth(&self) -> Result<(), EvalError> {
        let limit = self.config.max_call_depth;
        if self.env.depth() >= limit {
            return Err(stack_overflow(limit));
        }
        Ok(())
    }

    /// The cached body of `f`, parsing its source on first use.
    fn function_body(&self, f: &FunctionValue) -> Result<Arc<Node>, EvalError> {
        if let Some(body) = f.def().cached_body() {
            return Ok(Arc::clone(body));
        }
        let literal =
            parse_function(f.source()).map_err(|e| parse_deferred(f.source(), e.to_string()))?;
        let Some(body) = literal.body else {
            return Err(parse_deferred(f.source(), "body does not parse"));
        };
        tracing::debug!(source = f.source(), "parsed function body on first call");
        Ok(Arc::clone(f.def().cache_body(body)))
    }
}

/// `@[f;x;:]` and `.[f;x;:]`: a third argument that is a bare `:`.
fn is_trap(args: &[Node]) -> bool {
    matches!(
        args,
        [_, _, last] if last.is_unapplied()
            && last.kind == NodeKind::BinaryOp(Operator::Verb(Verb::Colon))
    )
}
