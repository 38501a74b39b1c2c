//! Function literals `{[a;b] body}`.

use std::sync::Arc;

use kiln_ir::{FunctionLiteral, Node, NodeKind, TokenKind};

use crate::{ParseError, Parser};

const IMPLICIT_PARAMS: [&str; 3] = ["x", "y", "z"];

impl Parser<'_> {
    /// Parse a function literal at the current `{`.
    ///
    /// When `strict` is false a body that fails to parse is recorded as
    /// `None` and the literal still succeeds; calling the function reports the
    /// error later.
    pub(crate) fn parse_function_literal(&mut self, strict: bool) -> Result<Node, ParseError> {
        let open_index = self.cursor.position();
        let open = self.cursor.current_span();
        let close_index = self
            .cursor
            .matching_close(open_index)
            .ok_or_else(|| ParseError::unclosed('{', open))?;
        let close = self.cursor.peek(close_index - open_index);
        let span = open.merge(close.span);
        let source = span.slice(self.source).to_string();

        self.cursor.advance();
        let declared = if self.cursor.check(&TokenKind::LBracket) {
            Some(self.parse_params()?)
        } else {
            None
        };

        let body_start = self.cursor.position();
        let body = match self.parse_statements(&TokenKind::RBrace) {
            Ok(body) if self.cursor.position() == close_index => Some(Arc::new(body)),
            Ok(_) if strict => {
                return Err(ParseError::unexpected(
                    self.cursor.current_kind(),
                    self.cursor.current_span(),
                ));
            }
            Err(err) if strict => return Err(err),
            Ok(_) | Err(_) => {
                tracing::debug!(%source, "function body deferred");
                None
            }
        };

        let params = declared.unwrap_or_else(|| self.implicit_params(body_start, close_index));
        self.cursor.set_position(close_index + 1);

        let literal = FunctionLiteral {
            params,
            source,
            body,
        };
        Ok(Node::new(NodeKind::Function(literal), Vec::new(), span))
    }

    /// `[a;b;c]` after the opening brace. `[]` declares no parameters.
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        let open = self.cursor.current_span();
        self.cursor.advance();
        let mut params = Vec::new();
        if self.cursor.eat(&TokenKind::RBracket) {
            return Ok(params);
        }
        loop {
            match self.cursor.current_kind() {
                TokenKind::Name(name) if !name.contains('.') => {
                    params.push(name.clone());
                    self.cursor.advance();
                }
                _ => {
                    return Err(ParseError::InvalidParams {
                        span: open.merge(self.cursor.current_span()),
                    })
                }
            }
            if self.cursor.eat(&TokenKind::RBracket) {
                return Ok(params);
            }
            if !self.cursor.eat(&TokenKind::Semi) {
                return Err(ParseError::InvalidParams {
                    span: open.merge(self.cursor.current_span()),
                });
            }
        }
    }

    /// `x`, `x y` or `x y z`, up to the highest one the body mentions outside
    /// nested function literals. At least `x`.
    fn implicit_params(&self, start: usize, end: usize) -> Vec<String> {
        let mut depth = 0usize;
        let mut highest = 0;
        for token in self.cursor.slice(start, end) {
            match &token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                TokenKind::Name(name) if depth == 0 => {
                    if let Some(rank) = IMPLICIT_PARAMS.iter().position(|p| p == name) {
                        highest = highest.max(rank);
                    }
                }
                _ => {}
            }
        }
        IMPLICIT_PARAMS[..=highest]
            .iter()
            .map(|p| (*p).to_string())
            .collect()
    }
}
