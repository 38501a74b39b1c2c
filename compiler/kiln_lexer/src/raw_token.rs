//! Raw tokens recognized by logos, before cooking.
//!
//! Whitespace is not skipped: the cooking loop needs to see it to compute
//! [`kiln_ir::TokenFlags`] and to decide whether `/` starts a comment.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    // Numbers: `1`, `2.5`, `1e3`, `.5`, `7j`, and the sentinels.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?j?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"0[IN]j?")]
    #[regex(r"0[in]")]
    Sentinel,

    #[regex(r#""([^"\\]|\\[^\n])*""#)]
    Str,

    /// A `"` that never closes.
    #[token("\"")]
    UnterminatedStr,

    #[regex(r"`([a-zA-Z_.][a-zA-Z0-9_.]*)?")]
    Symbol,

    #[regex(r#"`"([^"\\]|\\[^\n])*""#)]
    QuotedSymbol,

    #[regex(r"\.?[a-zA-Z][a-zA-Z0-9_]*(\.[a-zA-Z][a-zA-Z0-9_]*)*")]
    Name,

    #[regex(r"_[a-z]+")]
    SystemName,

    #[token("4:")]
    TypeCode,
    #[token("5:")]
    Represent,

    #[token("::")]
    DoubleColon,

    #[token("/:")]
    EachRight,
    #[token("\\:")]
    EachLeft,
    #[token("':")]
    EachPrior,
    #[token("/")]
    Slash,
    #[token("\\")]
    Backslash,
    #[token("'")]
    Quote,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("%")]
    #[token("!")]
    #[token("&")]
    #[token("|")]
    #[token("<")]
    #[token(">")]
    #[token("=")]
    #[token("~")]
    #[token("@")]
    #[token("?")]
    #[token("#")]
    #[token("_")]
    #[token("^")]
    #[token(",")]
    #[token("$")]
    #[token(".")]
    #[token(":")]
    Verb,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
}
