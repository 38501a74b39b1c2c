//! Recursive descent parser for kiln.
//!
//! K reads right to left: `2*3+4` is `2*(3+4)`. The parser collects the
//! terms of one expression (nouns, verbs, derived verbs) and folds them from
//! the right, so a verb with a noun on its left is dyadic and any other verb
//! is monadic. Two adjacent nouns are an application (`f x`, `v 1`).
//!
//! The output is the [`kiln_ir::Node`] contract consumed by the evaluator.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use kiln_ir::{FunctionLiteral, Node, NodeKind, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Text the token spans index into; function literals keep their slice.
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
        }
    }

    /// Parse a whole program: statements separated by `;` or newlines.
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let program = self.parse_statements(&TokenKind::Eof)?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::unexpected(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        Ok(program)
    }
}

/// Parse source text into a single node (a `Block` for several statements).
pub fn parse(source: &str) -> Result<Node, ParseError> {
    tracing::trace!(len = source.len(), "parse");
    let tokens = kiln_lexer::lex(source)?;
    Parser::new(&tokens, source).parse_program()
}

/// Parse the full text of a function literal (`{[a;b] a+b}`).
///
/// Unlike a literal met inside a program, a body that fails to parse is an
/// error here: this is the path taken when a function is called without a
/// cached body.
pub fn parse_function(source: &str) -> Result<FunctionLiteral, ParseError> {
    let tokens = kiln_lexer::lex(source)?;
    let mut parser = Parser::new(&tokens, source);
    if !parser.cursor.check(&TokenKind::LBrace) {
        return Err(ParseError::unexpected(
            parser.cursor.current_kind(),
            parser.cursor.current_span(),
        ));
    }
    let node = parser.parse_function_literal(true)?;
    if !parser.cursor.is_at_end() {
        return Err(ParseError::unexpected(
            parser.cursor.current_kind(),
            parser.cursor.current_span(),
        ));
    }
    match node.kind {
        NodeKind::Function(literal) => Ok(literal),
        _ => Err(ParseError::unexpected("expression", node.span)),
    }
}

#[cfg(test)]
mod tests;
