//! Error types for evaluation.
//!
//! `EvalErrorKind` gives each failure a typed category; the factory functions
//! (`division_by_zero()`, `length_error(..)`, ...) are the construction API
//! and fill in both `kind` and `message`.
//!
//! Messages are user-facing: trapped apply (`@[f;x;:]`) returns them as
//! character vectors, so `1%0` trapped yields `(1;"Division by zero")`.

use kiln_ir::Span;
use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Type error: {detail}")]
    Type { detail: String },

    #[error("Length error: {left} vs {right}")]
    Length { left: usize, right: usize },

    #[error("Rank error: {detail}")]
    Rank { detail: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Index out of bounds: {index}")]
    IndexOutOfBounds { index: i64 },

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Arity error: expected {expected} arguments, got {got}")]
    Arity { expected: usize, got: usize },

    #[error("Parse error in {source_text}: {detail}")]
    ParseDeferred { source_text: String, detail: String },

    #[error("Parse error: {detail}")]
    Parse { detail: String },

    #[error("Domain error: {detail}")]
    Domain { detail: String },

    #[error("Not supported: {feature}")]
    NotSupported { feature: String },

    #[error("Stack overflow: call depth exceeded {limit}")]
    StackOverflow { limit: usize },
}

/// Evaluation error.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Source location, when known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span unless one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Stack exhaustion is never converted to data by trapped apply.
    pub fn is_stack_overflow(&self) -> bool {
        matches!(self.kind, EvalErrorKind::StackOverflow { .. })
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Operator applied to an incompatible value or pair of values.
#[cold]
pub fn type_error(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Type {
        detail: detail.into(),
    })
}

/// Operator applied to a pair of incompatible variants.
#[cold]
pub fn binary_type_error(op: &str, left: &Value, right: &Value) -> EvalError {
    type_error(format!(
        "cannot apply {op} to {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

/// Operator applied to a value it does not accept.
#[cold]
pub fn unary_type_error(op: &str, operand: &Value) -> EvalError {
    type_error(format!("cannot apply {op} to {}", operand.type_name()))
}

/// Mismatched vector lengths in a pointwise operation.
#[cold]
pub fn length_error(left: usize, right: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Length { left, right })
}

/// Scalar where a vector is required, or the reverse.
#[cold]
pub fn rank_error(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Rank {
        detail: detail.into(),
    })
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Index out of bounds.
#[cold]
pub fn index_out_of_bounds(index: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index })
}

/// Dictionary lookup miss.
#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

/// Wrong argument count where projection does not apply.
#[cold]
pub fn arity_error(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Arity { expected, got })
}

/// Function body that only fails to parse when the function is called.
#[cold]
pub fn parse_deferred(source_text: &str, detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseDeferred {
        source_text: source_text.to_string(),
        detail: detail.into(),
    })
}

/// Source text passed to execute (or the host) that does not parse.
#[cold]
pub fn parse_error(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Parse {
        detail: detail.into(),
    })
}

/// Argument outside the operator's domain (negative counts, bad cuts).
#[cold]
pub fn domain_error(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Domain {
        detail: detail.into(),
    })
}

/// Deliberately unimplemented language feature.
#[cold]
pub fn not_supported(feature: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotSupported {
        feature: feature.into(),
    })
}

/// Maximum call depth exceeded.
#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}
