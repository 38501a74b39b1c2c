//! Nouns: literals, names, parenthesized lists and bracket arguments.

use kiln_ir::{Literal, Node, NodeKind, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_noun(&mut self) -> Result<Node, ParseError> {
        let token = self.cursor.current();
        match &token.kind {
            TokenKind::Number(_) => Ok(self.parse_numbers()),
            TokenKind::Symbol(_) => Ok(self.parse_symbols()),
            TokenKind::Str(bytes) => {
                self.cursor.advance();
                let literal = match bytes.as_slice() {
                    [byte] => Literal::Char(*byte),
                    _ => Literal::Str(bytes.clone()),
                };
                Ok(Node::literal(literal, token.span))
            }
            TokenKind::Name(name) => {
                self.cursor.advance();
                Ok(Node::variable(name.clone(), token.span))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBrace => self.parse_function_literal(false),
            other => Err(ParseError::unexpected(other, token.span)),
        }
    }

    /// Adjacent numbers form one vector literal: `1 2 3`, `1 2.5`.
    fn parse_numbers(&mut self) -> Node {
        let start = self.cursor.current_span();
        let mut numbers = Vec::new();
        while let TokenKind::Number(literal) = self.cursor.current_kind() {
            numbers.push(literal.clone());
            self.cursor.advance();
        }
        let span = start.merge(self.cursor.previous_span());
        Node::literal(number_vector(numbers), span)
    }

    /// Adjacent symbols form one symbol vector: `` `a`b `c ``.
    fn parse_symbols(&mut self) -> Node {
        let start = self.cursor.current_span();
        let mut symbols = Vec::new();
        while let TokenKind::Symbol(name) = self.cursor.current_kind() {
            symbols.push(Literal::Symbol(name.clone()));
            self.cursor.advance();
        }
        let span = start.merge(self.cursor.previous_span());
        let literal = if symbols.len() == 1 {
            symbols.swap_remove(0)
        } else {
            Literal::Vector(symbols)
        };
        Node::literal(literal, span)
    }

    /// `()` is the empty list, `(x)` groups, `(x;y)` is a list.
    fn parse_paren(&mut self) -> Result<Node, ParseError> {
        let open = self.cursor.current_span();
        self.cursor.advance();
        let mut items = self.parse_list(&TokenKind::RParen, '(', open)?;
        let span = open.merge(self.cursor.previous_span());
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                if item.is_empty() {
                    return Ok(Node::new(NodeKind::Vector, Vec::new(), span));
                }
                return Ok(item);
            }
        }
        Ok(Node::new(NodeKind::Vector, items, span))
    }

    /// `[a;b;c]` arguments. Elided arguments are `Empty`; `[]` has none.
    pub(crate) fn parse_bracket_args(&mut self) -> Result<Vec<Node>, ParseError> {
        let open = self.cursor.current_span();
        if !self.cursor.eat(&TokenKind::LBracket) {
            return Err(ParseError::unexpected(self.cursor.current_kind(), open));
        }
        let args = self.parse_list(&TokenKind::RBracket, '[', open)?;
        if matches!(args.as_slice(), [only] if only.is_empty()) {
            return Ok(Vec::new());
        }
        Ok(args)
    }

    /// Expressions separated by `;` up to and including `close`.
    fn parse_list(
        &mut self,
        close: &TokenKind,
        delimiter: char,
        open: Span,
    ) -> Result<Vec<Node>, ParseError> {
        let mut items = Vec::new();
        loop {
            items.push(self.parse_expr()?);
            match self.cursor.current_kind() {
                TokenKind::Semi => {
                    self.cursor.advance();
                }
                kind if kind == close => {
                    self.cursor.advance();
                    return Ok(items);
                }
                TokenKind::Eof => return Err(ParseError::unclosed(delimiter, open)),
                other => {
                    return Err(ParseError::unexpected(other, self.cursor.current_span()));
                }
            }
        }
    }
}

/// Combine adjacent numeric atoms, promoting to the widest type present.
fn number_vector(mut numbers: Vec<Literal>) -> Literal {
    if numbers.len() == 1 {
        return numbers.swap_remove(0);
    }
    let has_float = numbers.iter().any(|n| matches!(n, Literal::Float(_)));
    let has_long = numbers.iter().any(|n| matches!(n, Literal::Long(_)));
    let promoted = numbers
        .into_iter()
        .map(|n| {
            if has_float {
                Literal::Float(as_float(&n))
            } else if has_long {
                Literal::Long(as_long(&n))
            } else {
                n
            }
        })
        .collect();
    Literal::Vector(promoted)
}

/// Widen keeping sentinels: `0I`/`0N`/`-0I` become `0i`/`0n`/`-0i`.
fn as_float(n: &Literal) -> f64 {
    match *n {
        Literal::Int(i32::MAX) | Literal::Long(i64::MAX) => f64::INFINITY,
        Literal::Int(i32::MIN) | Literal::Long(i64::MIN) => f64::NAN,
        Literal::Int(i) if i == i32::MIN + 1 => f64::NEG_INFINITY,
        Literal::Long(i) if i == i64::MIN + 1 => f64::NEG_INFINITY,
        Literal::Int(i) => f64::from(i),
        #[allow(clippy::cast_precision_loss)]
        Literal::Long(i) => i as f64,
        Literal::Float(f) => f,
        _ => f64::NAN,
    }
}

fn as_long(n: &Literal) -> i64 {
    match *n {
        Literal::Int(i32::MAX) => i64::MAX,
        Literal::Int(i32::MIN) => i64::MIN,
        Literal::Int(i) if i == i32::MIN + 1 => i64::MIN + 1,
        Literal::Int(i) => i64::from(i),
        Literal::Long(i) => i,
        _ => i64::MIN,
    }
}
