//! Tokens produced by the lexer.
//!
//! K is whitespace-sensitive in three places: `/` after whitespace starts a
//! comment, `-` glued to a digit may be part of a negative literal, and
//! numbers separated by spaces form one vector literal. The lexer resolves the
//! first two; the parser needs [`TokenFlags`] for the third.

use std::fmt;

use crate::{Adverb, Literal, Span, Verb};

/// Token kind with its cooked payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Numeric atom: `Literal::Int`, `Literal::Long` or `Literal::Float`.
    Number(Literal),
    /// String literal, escapes already cooked.
    Str(Vec<u8>),
    /// Symbol literal without the leading backtick.
    Symbol(String),
    /// Identifier, possibly dotted (`a`, `.k.x`, `a.b`) or a system name (`_bd`).
    Name(String),
    Verb(Verb),
    Adverb(Adverb),
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semi,
    Newline,
    /// `::` global assignment.
    DoubleColon,
    Eof,
}

impl TokenKind {
    /// Whether this token can end a noun, so that a following `-1` is a
    /// subtraction rather than a negative literal.
    pub fn ends_noun(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::Symbol(_)
                | TokenKind::Name(_)
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
        )
    }

    /// Whether this token terminates an expression.
    pub fn ends_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Semi
                | TokenKind::Newline
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(lit) => write!(f, "number {lit:?}"),
            TokenKind::Str(_) => f.write_str("string"),
            TokenKind::Symbol(s) => write!(f, "`{s}"),
            TokenKind::Name(n) => f.write_str(n),
            TokenKind::Verb(v) => write!(f, "{v}"),
            TokenKind::Adverb(a) => write!(f, "{a}"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Semi => f.write_str(";"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::DoubleColon => f.write_str("::"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// Per-token whitespace flags packed into a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Spaces or tabs preceded this token.
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    /// No whitespace of any kind between this token and the previous one.
    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.0 == 0
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);

/// A token with its span and whitespace flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, flags: TokenFlags) -> Self {
        Token { kind, span, flags }
    }
}

/// Token stream terminated by a single `Eof` token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Last token pushed so far.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Token> {
        self.tokens.last_mut()
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, for tests and debugging.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
