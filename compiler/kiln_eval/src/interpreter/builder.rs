//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::ktree::{KTree, DEFAULT_BRANCH};
use crate::Environment;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2000;

/// Settings fixed for the lifetime of an interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Nested calls allowed before `StackOverflow` is raised.
    pub max_call_depth: usize,
    /// K-tree branch unqualified names resolve against at start-up.
    pub initial_branch: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            initial_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Builder for creating Interpreter instances with various configurations.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    config: InterpreterConfig,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Set the call-depth limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    /// Set the initial K-tree branch (`.k` by default).
    #[must_use]
    pub fn initial_branch(mut self, branch: impl Into<String>) -> Self {
        self.config.initial_branch = branch.into();
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let ktree = KTree::new(&self.config.initial_branch);
        tracing::debug!(
            max_call_depth = self.config.max_call_depth,
            branch = %self.config.initial_branch,
            "interpreter created"
        );
        Interpreter {
            env: Environment::default(),
            ktree,
            config: self.config,
        }
    }
}
