//! Derived verbs: a verb, function or derived verb modified by an adverb.
//!
//! The interpreter only picks the form (monadic or dyadic operand, seeded
//! or not) and builds the callback; the iteration itself lives in
//! [`crate::adverbs`].

use kiln_ir::{Adverb, Node};
use kiln_value::{arity_error, not_supported, type_error, EvalError, EvalResult, Value};

use super::call::{is_applicable, Callable};
use super::Interpreter;
use crate::adverbs;

impl Interpreter {
    /// `f/x` (two children) or `x f/y` (three children).
    pub(super) fn eval_derived(&mut self, adverb: Adverb, children: &[Node]) -> EvalResult {
        match children {
            [operand, y] => {
                let y = self.eval(y)?;
                let operand = self.eval_callable(operand)?;
                self.apply_derived(adverb, &operand, vec![y])
            }
            [operand, x, y] => {
                let y = self.eval(y)?;
                let x = self.eval(x)?;
                let operand = self.eval_callable(operand)?;
                self.apply_derived(adverb, &operand, vec![x, y])
            }
            _ => Err(not_supported(format!("derived verb {adverb} without arguments"))),
        }
    }

    /// Apply `operand` modified by `adverb` to one or two arguments.
    #[tracing::instrument(level = "trace", skip(self, operand, args), fields(argc = args.len()))]
    pub(crate) fn apply_derived(
        &mut self,
        adverb: Adverb,
        operand: &Callable,
        args: Vec<Value>,
    ) -> EvalResult {
        let dyadic = operand.valence() >= 2;
        match (adverb, args.as_slice()) {
            (Adverb::Over | Adverb::Scan, [x]) if dyadic => {
                let mut f = |a: &Value, b: &Value| self.call(operand, &[a, b]);
                if adverb == Adverb::Over {
                    adverbs::over(&mut f, None, x, &adverbs::identity(operand.as_verb()))
                } else {
                    adverbs::scan(&mut f, None, x)
                }
            }
            (Adverb::Over | Adverb::Scan, [x]) => {
                let mut f = |a: &Value| self.call(operand, &[a]);
                if adverb == Adverb::Over {
                    adverbs::converge(&mut f, x)
                } else {
                    adverbs::converge_scan(&mut f, x)
                }
            }
            (Adverb::Over | Adverb::Scan, [seed, x]) if dyadic => {
                // Integer 0 on the left means "no seed".
                let seed = Some(seed).filter(|s| !matches!(s, Value::Int(0)));
                let mut f = |a: &Value, b: &Value| self.call(operand, &[a, b]);
                if adverb == Adverb::Over {
                    adverbs::over(&mut f, seed, x, &adverbs::identity(operand.as_verb()))
                } else {
                    adverbs::scan(&mut f, seed, x)
                }
            }
            (Adverb::Over | Adverb::Scan, [control, x]) => {
                self.iterate_monadic(adverb == Adverb::Scan, operand, control, x)
            }
            (Adverb::Each, [x]) => {
                let mut f = |a: &Value| self.call(operand, &[a]);
                adverbs::each(&mut f, x)
            }
            (Adverb::Each | Adverb::EachRight | Adverb::EachLeft, [x, y]) => {
                let mut f = |a: &Value, b: &Value| self.call(operand, &[a, b]);
                match adverb {
                    Adverb::EachRight => adverbs::each_right(&mut f, x, y),
                    Adverb::EachLeft => adverbs::each_left(&mut f, x, y),
                    _ => adverbs::each_pair(&mut f, x, y),
                }
            }
            (Adverb::EachPrior, [x] | [_, x]) => {
                let mut f = |a: &Value, b: &Value| self.call(operand, &[a, b]);
                adverbs::each_prior(&mut f, x)
            }
            _ => Err(arity_error(if adverb.derives_monadic() { 1 } else { 2 }, args.len())),
        }
    }

    /// `n f/x` and `c f/x` with a monadic `f`: repeat `n` times, or while
    /// `c[x]` is true.
    fn iterate_monadic(
        &mut self,
        keep_steps: bool,
        operand: &Callable,
        control: &Value,
        x: &Value,
    ) -> EvalResult {
        if is_applicable(control) {
            let condition = Callable::from_value(control.clone());
            let mut step = |v: &Value| -> Result<Option<Value>, EvalError> {
                if self.call(&condition, &[v])?.is_truthy() {
                    self.call(operand, &[v]).map(Some)
                } else {
                    Ok(None)
                }
            };
            return if keep_steps {
                adverbs::iterate_while_scan(&mut step, x)
            } else {
                adverbs::iterate_while(&mut step, x)
            };
        }
        let Some(n) = control.as_i64() else {
            return Err(type_error(format!("cannot iterate {} times", control.type_name())));
        };
        let n = usize::try_from(n).unwrap_or(0);
        let mut f = |a: &Value| self.call(operand, &[a]);
        if keep_steps {
            adverbs::repeat_scan(&mut f, n, x)
        } else {
            adverbs::repeat(&mut f, n, x)
        }
    }
}
