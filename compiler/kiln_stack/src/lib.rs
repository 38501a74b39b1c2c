//! Stack growth for deep recursion.
//!
//! K programs nest arbitrarily: `((((1))))` parses recursively and a user
//! function that calls itself re-enters the evaluator once per call. Both the
//! parser and the interpreter wrap their recursive entry points in
//! [`ensure_sufficient_stack`] so the native stack is extended on the heap
//! instead of overflowing.
//!
//! This does not make recursion unbounded. The interpreter still enforces its
//! own call-depth limit and reports it as a typed error; this crate only keeps
//! the host process alive up to that limit.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call.

/// If less than this much stack remains, grow before recursing (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is below the red zone.
///
/// ```text
/// fn eval(&mut self, node: &Node) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(node))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
