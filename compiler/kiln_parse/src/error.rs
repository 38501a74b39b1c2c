//! Parse errors.

use kiln_ir::Span;
use kiln_lexer::LexError;
use thiserror::Error;

/// A syntax error with the location it was detected at.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unexpected {found} at {span}")]
    UnexpectedToken { found: String, span: Span },

    #[error("unclosed `{delimiter}` opened at {span}")]
    Unclosed { delimiter: char, span: Span },

    #[error("adverb `{adverb}` has no operand at {span}")]
    MissingOperand { adverb: String, span: Span },

    #[error("invalid parameter list at {span}")]
    InvalidParams { span: Span },
}

impl ParseError {
    #[cold]
    pub fn unexpected(found: impl ToString, span: Span) -> Self {
        ParseError::UnexpectedToken {
            found: found.to_string(),
            span,
        }
    }

    #[cold]
    pub fn unclosed(delimiter: char, span: Span) -> Self {
        ParseError::Unclosed { delimiter, span }
    }

    /// Location of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::UnexpectedToken { span, .. }
            | ParseError::Unclosed { span, .. }
            | ParseError::MissingOperand { span, .. }
            | ParseError::InvalidParams { span } => *span,
        }
    }
}
