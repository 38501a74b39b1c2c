//! RAII guard for call frames.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! the callee body is evaluated through it like the interpreter itself. The
//! frame is popped when the guard is dropped: on return, on an error
//! propagated with `?`, and during unwinding.
//!
//! ```text
//! let mut scoped = interpreter.scoped(frame);
//! let result = scoped.eval(&body);
//! // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::Frame;

/// RAII guard that pops the call frame it pushed.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_frame();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push `frame` and return a guard that pops it on drop.
    pub fn scoped(&mut self, frame: Frame) -> ScopedInterpreter<'_> {
        self.env.push_frame(frame);
        ScopedInterpreter { interpreter: self }
    }
}
