//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use kiln_ir::{Span, Token, TokenFlags, TokenKind, TokenList};

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
    flags: TokenFlags::EMPTY,
};

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends with `Eof`, and the cursor never moves
/// past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly, clamped to the `Eof` token.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len().saturating_sub(1));
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the previously consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.token_at(prev).span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Token at offset `n` from the current position (`peek(0)` is current).
    pub fn peek(&self, n: usize) -> &'a Token {
        self.token_at(self.pos + n)
    }

    #[inline]
    pub fn peek_kind(&self, n: usize) -> &'a TokenKind {
        &self.peek(n).kind
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Index of the token closing the delimiter opened at `open_index`.
    ///
    /// Only delimiters of the same kind are counted, so a stray `)` inside a
    /// function body does not end the body.
    pub fn matching_close(&self, open_index: usize) -> Option<usize> {
        let (open, close) = match self.token_at(open_index).kind {
            TokenKind::LParen => (TokenKind::LParen, TokenKind::RParen),
            TokenKind::LBracket => (TokenKind::LBracket, TokenKind::RBracket),
            TokenKind::LBrace => (TokenKind::LBrace, TokenKind::RBrace),
            _ => return None,
        };
        let mut depth = 0usize;
        for index in open_index..self.tokens.len() {
            let kind = &self.token_at(index).kind;
            if *kind == open {
                depth += 1;
            } else if *kind == close {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            } else if *kind == TokenKind::Eof {
                return None;
            }
        }
        None
    }

    /// Tokens in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> impl Iterator<Item = &'a Token> + 'a {
        let tokens = self.tokens;
        (start..end).filter_map(move |i| tokens.get(i))
    }

    fn token_at(&self, index: usize) -> &'a Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }
}
