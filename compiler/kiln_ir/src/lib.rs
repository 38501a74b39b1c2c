//! Kiln IR - the contract between the parser and the evaluator.
//!
//! The lexer produces [`Token`]s, the parser turns them into a tree of
//! [`Node`]s, and the evaluator walks that tree. Nothing in this crate knows
//! about runtime values: literals are carried as [`Literal`] and converted by
//! the evaluator.
//!
//! # Node contract
//!
//! Every node exposes a kind (with its attached literal payload where
//! relevant), zero or more ordered children, and a source span. The evaluator
//! never mutates a node; function bodies are shared through `Arc<Node>` so a
//! parsed body can be cached by identity on the function value that owns it.

mod ast;
mod operators;
mod span;
mod token;

pub use ast::{AssignScope, Assignment, FunctionLiteral, Literal, Node, NodeKind, Operator};
pub use operators::{is_system_name, Adverb, Verb, SYSTEM_NAMES};
pub use span::Span;
pub use token::{Token, TokenFlags, TokenKind, TokenList};
