//! Lexical scope for the interpreter.
//!
//! Uses a frame stack (not cloning) for call scopes. A callee sees every
//! binding visible to its caller at call time: lookup walks the frames from
//! the innermost outwards and then the root global map. Assignment writes
//! into the innermost frame only, so nothing a call binds leaks back to its
//! caller or to a sibling call.

use rustc_hash::FxHashMap;

use kiln_value::Value;

/// One call's local bindings.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Value>,
    /// K-tree branch of the function being executed.
    branch: Option<String>,
}

impl Frame {
    pub fn new(branch: Option<String>) -> Self {
        Frame {
            bindings: FxHashMap::default(),
            branch,
        }
    }

    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}

/// Environment for the interpreter using a frame stack.
///
/// With no frames pushed, local assignment targets the global map: top-level
/// statements run in the global scope.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// Call frames, innermost last.
    frames: Vec<Frame>,
    /// Root global scope.
    global: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of active call frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    #[inline]
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Branch of the function currently executing.
    pub fn current_branch(&self) -> Option<&str> {
        self.frames.last().and_then(Frame::branch)
    }

    /// Bind in the innermost frame, or globally at top level.
    pub fn define_local(&mut self, name: &str, value: Value) {
        match self.frames.last_mut() {
            Some(frame) => frame.define(name, value),
            None => self.define_global(name, value),
        }
    }

    /// Bind in the root global scope, bypassing every frame.
    pub fn define_global(&mut self, name: &str, value: Value) {
        self.global.insert(name.to_string(), value);
    }

    /// Full lookup: current frame, enclosing frames, then globals.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.lookup(name))
            .or_else(|| self.global.get(name))
    }
}
