//! Forms that do not evaluate all their arguments up front, or that treat
//! errors and arguments specially.
//!
//! - `if[c;e...]`, `do[n;e...]`, `while[c;e...]`
//! - `:[c1;t1;c2;t2;...;else]`
//! - trapped apply: `@[f;x;:]`, `.[f;args;:]`
//! - amend: `@[x;i;f]`, `@[x;i;f;y]`, `.[x;path;f]`, `.[x;path;f;y]`

use kiln_ir::{Node, Verb};
use kiln_value::{
    arity_error, index_out_of_bounds, type_error, unary_type_error, Dictionary, EvalResult, Value,
};

use super::call::Callable;
use super::Interpreter;
use crate::verbs;

impl Interpreter {
    /// Evaluate `word[args]` if `word` is a control word.
    pub(super) fn eval_control_word(&mut self, word: &str, args: &[Node]) -> Option<EvalResult> {
        let result = match word {
            "if" => self.eval_if(args),
            "do" => self.eval_do(args),
            "while" => self.eval_while(args),
            _ => return None,
        };
        Some(result)
    }

    fn eval_if(&mut self, args: &[Node]) -> EvalResult {
        let Some((condition, body)) = args.split_first() else {
            return Err(arity_error(1, 0));
        };
        if self.eval(condition)?.is_truthy() {
            self.eval_block(body)?;
        }
        Ok(Value::Null)
    }

    fn eval_do(&mut self, args: &[Node]) -> EvalResult {
        let Some((count, body)) = args.split_first() else {
            return Err(arity_error(1, 0));
        };
        let count = self.eval(count)?;
        let Some(n) = count.as_i64() else {
            return Err(unary_type_error("do", &count));
        };
        for _ in 0..n.max(0) {
            self.eval_block(body)?;
        }
        Ok(Value::Null)
    }

    fn eval_while(&mut self, args: &[Node]) -> EvalResult {
        let Some((condition, body)) = args.split_first() else {
            return Err(arity_error(1, 0));
        };
        while self.eval(condition)?.is_truthy() {
            self.eval_block(body)?;
        }
        Ok(Value::Null)
    }

    /// `:[c1;t1;...;else]`: the branch of the first true condition. Only
    /// that branch, and the conditions before it, are evaluated.
    pub(super) fn eval_conditional(&mut self, args: &[Node]) -> EvalResult {
        let mut pairs = args.chunks_exact(2);
        for pair in pairs.by_ref() {
            if self.eval(&pair[0])?.is_truthy() {
                return self.eval(&pair[1]);
            }
        }
        match pairs.remainder() {
            [otherwise] => self.eval(otherwise),
            _ => Ok(Value::Null),
        }
    }

    /// `@[f;x;:]` and `.[f;args;:]`: `(0;result)` on success, `(1;message)`
    /// when the application fails. Running out of call depth is not trapped.
    pub(super) fn eval_trap(&mut self, verb: Verb, function: &Node, arg: &Node) -> EvalResult {
        let arg = self.eval(arg)?;
        let callable = self.eval_callable(function)?;
        let args = match verb {
            Verb::Dot => verbs::path_items(&arg).into_iter().map(Some).collect(),
            _ => vec![Some(arg)],
        };
        match self.apply_callable(&callable, args) {
            Ok(value) => Ok(Value::vector(vec![Value::Int(0), value])),
            Err(err) if err.is_stack_overflow() => Err(err),
            Err(err) => {
                tracing::debug!(error = %err, "trapped");
                Ok(Value::vector(vec![Value::Int(1), Value::string(&err.message)]))
            }
        }
    }

    /// `@[x;i;f]`, `@[x;i;f;y]`, `.[x;path;f]` and `.[x;path;f;y]`: `x` with
    /// the selected elements replaced by `f` applied to them (and `y`).
    pub(super) fn eval_amend(&mut self, verb: Verb, args: &[Node]) -> EvalResult {
        let y = match args.get(3) {
            Some(y) => Some(self.eval(y)?),
            None => None,
        };
        let update = self.eval_callable(&args[2])?;
        let index = self.eval(&args[1])?;
        let target = self.eval(&args[0])?;
        let path = match verb {
            Verb::Dot => verbs::path_items(&index),
            _ => vec![index],
        };
        self.amend(target, &path, &update, y.as_ref())
    }

    /// Replace the elements of `target` selected by `path` with
    /// `update[old]`, or `update[old;y]` when `y` is given.
    ///
    /// A list index amends each element it names, pairing them with the
    /// elements of `y` when the lengths agree. A null index selects every
    /// element. Symbol indices create missing dictionary entries.
    pub(crate) fn amend(
        &mut self,
        target: Value,
        path: &[Value],
        update: &Callable,
        y: Option<&Value>,
    ) -> EvalResult {
        let Some((index, rest)) = path.split_first() else {
            return match y {
                Some(y) => self.call(update, &[&target, y]),
                None => self.call(update, &[&target]),
            };
        };
        match index {
            Value::Null => {
                let all = all_indices(&target);
                let mut expanded = Vec::with_capacity(path.len());
                expanded.push(all);
                expanded.extend_from_slice(rest);
                self.amend(target, &expanded, update, y)
            }
            Value::Vector { items, .. } => {
                let paired = y
                    .and_then(Value::as_vector)
                    .filter(|ys| ys.len() == items.len());
                let mut acc = target;
                let mut sub_path = Vec::with_capacity(path.len());
                for (k, item) in items.iter().enumerate() {
                    sub_path.clear();
                    sub_path.push(item.clone());
                    sub_path.extend_from_slice(rest);
                    let y_k = match paired {
                        Some(ys) => Some(&ys[k]),
                        None => y,
                    };
                    acc = self.amend(acc, &sub_path, update, y_k)?;
                }
                Ok(acc)
            }
            Value::Symbol(key) => {
                let mut dict = match target {
                    Value::Dictionary(d) => d.into_inner(),
                    Value::Null => Dictionary::new(),
                    other => {
                        return Err(type_error(format!(
                            "cannot amend {} at a symbol",
                            other.type_name()
                        )))
                    }
                };
                let old = dict.get(key).cloned().unwrap_or(Value::Null);
                let new = self.amend(old, rest, update, y)?;
                dict.insert(key, new);
                Ok(Value::dictionary(dict))
            }
            _ => {
                let Some(n) = index.as_i64() else {
                    return Err(type_error(format!("cannot amend at {}", index.type_name())));
                };
                let Value::Vector { items, tag } = target else {
                    return Err(type_error(format!("cannot amend {}", target.type_name())));
                };
                let mut items = items.into_inner();
                let i = usize::try_from(n)
                    .ok()
                    .filter(|&i| i < items.len())
                    .ok_or_else(|| index_out_of_bounds(n))?;
                let old = std::mem::replace(&mut items[i], Value::Null);
                items[i] = self.amend(old, rest, update, y)?;
                Ok(Value::typed_vector(items, tag))
            }
        }
    }
}

/// Every index of a list, or every key of a dictionary.
fn all_indices(target: &Value) -> Value {
    match target {
        Value::Dictionary(d) => Value::vector(d.keys().map(Value::symbol).collect()),
        other => Value::int_vector(
            (0..other.count()).map(|i| i32::try_from(i).unwrap_or(i32::MAX)),
        ),
    }
}
