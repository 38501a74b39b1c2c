//! Lexer for kiln using logos.
//!
//! Produces a [`TokenList`] terminated by a single `Eof` token. Three pieces of
//! K's whitespace sensitivity are resolved here rather than in the parser:
//!
//! - `/` preceded by whitespace (or at the start of a line) begins a comment
//!   that runs to the end of the line;
//! - `-` glued to a following number becomes part of a negative literal when
//!   it cannot be a dyadic minus (`-1`, `2*-1`, `1 -2`);
//! - newlines inside `(...)` and `[...]` are whitespace, while at top level
//!   and inside `{...}` they separate statements.

mod escape;
mod lex_error;
mod raw_token;

use kiln_ir::{is_system_name, Adverb, Literal, Span, Token, TokenFlags, TokenKind, TokenList, Verb};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lex source text into a [`TokenList`].
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);
    let mut pending = TokenFlags::EMPTY;
    let mut line_start = true;
    let mut delimiters: Vec<u8> = Vec::new();

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let Ok(raw) = token_result else {
            return Err(LexError::new(
                LexErrorKind::UnexpectedCharacter(slice.to_string()),
                span,
            ));
        };

        let kind = match raw {
            RawToken::Whitespace => {
                pending.set(TokenFlags::SPACE_BEFORE);
                continue;
            }
            RawToken::Newline => {
                let in_list = matches!(delimiters.last(), Some(b'(' | b'['));
                if !in_list {
                    result.push(Token::new(TokenKind::Newline, span, pending));
                }
                pending = TokenFlags::from_bits(TokenFlags::NEWLINE_BEFORE);
                line_start = true;
                continue;
            }
            RawToken::Slash if line_start || pending.has_space_before() => {
                let rest = logos.remainder();
                logos.bump(rest.find('\n').unwrap_or(rest.len()));
                pending.set(TokenFlags::TRIVIA_BEFORE);
                continue;
            }
            RawToken::Number | RawToken::Sentinel => {
                let literal = cook_number(slice).map_err(|kind| LexError::new(kind, span))?;
                if let Some(minus) = take_negative_sign(&mut result, pending) {
                    result.push(Token::new(
                        TokenKind::Number(negate(literal)),
                        minus.span.merge(span),
                        minus.flags,
                    ));
                    pending = TokenFlags::EMPTY;
                    line_start = false;
                    continue;
                }
                TokenKind::Number(literal)
            }
            RawToken::Str => {
                let content = &slice[1..slice.len() - 1];
                TokenKind::Str(escape::unescape(content).map_err(|kind| LexError::new(kind, span))?)
            }
            RawToken::UnterminatedStr => {
                return Err(LexError::new(LexErrorKind::UnterminatedString, span));
            }
            RawToken::Symbol => TokenKind::Symbol(slice[1..].to_string()),
            RawToken::QuotedSymbol => {
                let content = &slice[2..slice.len() - 1];
                let bytes = escape::unescape(content).map_err(|kind| LexError::new(kind, span))?;
                TokenKind::Symbol(String::from_utf8_lossy(&bytes).into_owned())
            }
            RawToken::Name => TokenKind::Name(slice.to_string()),
            RawToken::SystemName => {
                if is_system_name(slice) {
                    TokenKind::Name(slice.to_string())
                } else {
                    // `_x` is floor applied to `x`.
                    let underscore = Span::new(span.start, span.start + 1);
                    result.push(Token::new(TokenKind::Verb(Verb::Underscore), underscore, pending));
                    let rest = Span::new(span.start + 1, span.end);
                    result.push(Token::new(
                        TokenKind::Name(slice[1..].to_string()),
                        rest,
                        TokenFlags::EMPTY,
                    ));
                    pending = TokenFlags::EMPTY;
                    line_start = false;
                    continue;
                }
            }
            RawToken::TypeCode => TokenKind::Verb(Verb::TypeCode),
            RawToken::Represent => TokenKind::Verb(Verb::Represent),
            RawToken::DoubleColon => TokenKind::DoubleColon,
            RawToken::EachRight => TokenKind::Adverb(Adverb::EachRight),
            RawToken::EachLeft => TokenKind::Adverb(Adverb::EachLeft),
            RawToken::EachPrior => TokenKind::Adverb(Adverb::EachPrior),
            RawToken::Slash => TokenKind::Adverb(Adverb::Over),
            RawToken::Backslash => TokenKind::Adverb(Adverb::Scan),
            RawToken::Quote => TokenKind::Adverb(Adverb::Each),
            RawToken::Verb => match Verb::from_glyph(slice) {
                Some(verb) => TokenKind::Verb(verb),
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnexpectedCharacter(slice.to_string()),
                        span,
                    ))
                }
            },
            RawToken::LParen => {
                delimiters.push(b'(');
                TokenKind::LParen
            }
            RawToken::LBracket => {
                delimiters.push(b'[');
                TokenKind::LBracket
            }
            RawToken::LBrace => {
                delimiters.push(b'{');
                TokenKind::LBrace
            }
            RawToken::RParen => {
                delimiters.pop();
                TokenKind::RParen
            }
            RawToken::RBracket => {
                delimiters.pop();
                TokenKind::RBracket
            }
            RawToken::RBrace => {
                delimiters.pop();
                TokenKind::RBrace
            }
            RawToken::Semi => TokenKind::Semi,
        };

        result.push(Token::new(kind, span, pending));
        pending = TokenFlags::EMPTY;
        line_start = false;
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof, pending));
    Ok(result)
}

/// Pop a `-` that should be folded into the number about to be pushed.
///
/// The sign must be glued to the number, and the token before it must not end
/// a noun, unless that token is itself a number and the sign is separated
/// from it by whitespace (`1 -2` is a two-element vector).
fn take_negative_sign(result: &mut TokenList, number_flags: TokenFlags) -> Option<Token> {
    if !number_flags.is_adjacent() {
        return None;
    }
    let last = result.last()?;
    if last.kind != TokenKind::Verb(Verb::Minus) {
        return None;
    }
    let minus_flags = last.flags;
    let before = result.len().checked_sub(2).and_then(|i| result.get(i));
    let folds = match before {
        None => true,
        Some(tok) if matches!(tok.kind, TokenKind::Number(_)) => minus_flags.has_space_before(),
        Some(tok) => !tok.kind.ends_noun(),
    };
    if folds {
        result.pop()
    } else {
        None
    }
}

fn negate(literal: Literal) -> Literal {
    match literal {
        Literal::Int(i) => Literal::Int(i.wrapping_neg()),
        Literal::Long(i) => Literal::Long(i.wrapping_neg()),
        Literal::Float(f) => Literal::Float(-f),
        other => other,
    }
}

/// Convert the text of a numeric token to a literal.
fn cook_number(text: &str) -> Result<Literal, LexErrorKind> {
    let invalid = || LexErrorKind::InvalidNumber(text.to_string());
    match text {
        "0I" => return Ok(Literal::Int(i32::MAX)),
        "0N" => return Ok(Literal::Int(i32::MIN)),
        "0Ij" => return Ok(Literal::Long(i64::MAX)),
        "0Nj" => return Ok(Literal::Long(i64::MIN)),
        "0i" => return Ok(Literal::Float(f64::INFINITY)),
        "0n" => return Ok(Literal::Float(f64::NAN)),
        _ => {}
    }
    if let Some(digits) = text.strip_suffix('j') {
        if digits.contains(['.', 'e', 'E']) {
            return Err(invalid());
        }
        return digits.parse::<i64>().map(Literal::Long).map_err(|_| invalid());
    }
    if text.contains(['.', 'e', 'E']) {
        return text.parse::<f64>().map(Literal::Float).map_err(|_| invalid());
    }
    match text.parse::<i32>() {
        Ok(i) => Ok(Literal::Int(i)),
        Err(_) => text.parse::<i64>().map(Literal::Long).map_err(|_| invalid()),
    }
}
