//! Lexer errors.

use kiln_ir::Span;
use thiserror::Error;

/// What went wrong while tokenizing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape `\\{0}`")]
    InvalidEscape(char),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(String),
}

/// A lexer error located in the source.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}
