//! Statements, expressions and assignment.

use kiln_ir::{AssignScope, Assignment, Node, NodeKind, Operator, Span, TokenKind, Verb};

use super::Item;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Statements separated by `;` or newlines, up to (not including) `close`.
    ///
    /// Blank lines are skipped; an empty statement between two `;` is kept as
    /// an `Empty` node.
    pub(crate) fn parse_statements(&mut self, close: &TokenKind) -> Result<Node, ParseError> {
        let start = self.cursor.current_span();
        let mut statements = Vec::new();
        loop {
            while self.cursor.eat(&TokenKind::Newline) {}
            if self.cursor.check(close) {
                break;
            }
            statements.push(self.parse_expr()?);
            match self.cursor.current_kind() {
                TokenKind::Semi | TokenKind::Newline => {
                    self.cursor.advance();
                }
                kind if kind == close => break,
                other => {
                    return Err(ParseError::unexpected(other, self.cursor.current_span()));
                }
            }
        }

        let span = start.merge(self.cursor.previous_span());
        Ok(match statements.len() {
            0 => Node::empty(start),
            1 => statements.pop().unwrap_or_else(|| Node::empty(start)),
            _ => Node::new(NodeKind::Block, statements, span),
        })
    }

    /// One expression, up to the next `;`, newline or closing delimiter.
    pub(crate) fn parse_expr(&mut self) -> Result<Node, ParseError> {
        kiln_stack::ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.current_span();
        let mut items = Vec::new();
        while !self.cursor.current_kind().ends_expression() {
            if let Some(assignment) = self.parse_assignment()? {
                items.push(Item::Noun(assignment));
                break;
            }
            items.push(self.parse_item()?);
        }
        self.fold(items, start)
    }

    /// A verb or noun with its trailing brackets and adverbs.
    fn parse_item(&mut self) -> Result<Item, ParseError> {
        let token = self.cursor.current();
        let (node, is_verb) = match &token.kind {
            TokenKind::Verb(verb) => {
                self.cursor.advance();
                if *verb != Verb::Colon && self.eat_monadic_marker() {
                    let node = Node::verb(*verb, token.span.merge(self.cursor.previous_span()));
                    if let TokenKind::Adverb(_) = self.cursor.current_kind() {
                        return self.parse_postfix(node, true);
                    }
                    return Ok(Item::Monad(node));
                }
                (Node::verb(*verb, token.span), true)
            }
            TokenKind::Adverb(adverb) => {
                return Err(ParseError::MissingOperand {
                    adverb: adverb.to_string(),
                    span: token.span,
                });
            }
            _ => (self.parse_noun()?, false),
        };
        self.parse_postfix(node, is_verb)
    }

    /// `:` glued to the verb just consumed, as in `*:x`. A glued `:[`
    /// is left alone.
    fn eat_monadic_marker(&mut self) -> bool {
        let colon = self.cursor.current();
        let marked = colon.kind == TokenKind::Verb(Verb::Colon)
            && colon.flags.is_adjacent()
            && self.cursor.peek_kind(1) != &TokenKind::LBracket;
        if marked {
            self.cursor.advance();
        }
        marked
    }

    /// `f[args]` applications and `f/` derivations, left to right.
    fn parse_postfix(&mut self, mut node: Node, mut is_verb: bool) -> Result<Item, ParseError> {
        loop {
            match self.cursor.current_kind() {
                TokenKind::LBracket => {
                    let args = self.parse_bracket_args()?;
                    let span = node.span.merge(self.cursor.previous_span());
                    node = Node::call(node, args, span);
                    is_verb = false;
                }
                TokenKind::Adverb(adverb) => {
                    let adverb = *adverb;
                    let span = node.span.merge(self.cursor.current_span());
                    self.cursor.advance();
                    node = Node::new(
                        NodeKind::BinaryOp(Operator::Adverb(adverb)),
                        vec![node],
                        span,
                    );
                    is_verb = true;
                }
                _ => break,
            }
        }
        Ok(if is_verb {
            Item::Verb(node)
        } else {
            Item::Noun(node)
        })
    }

    /// Recognize `x:v`, `x::v`, `x+:v` and `x[i]:v`; the value is the rest of
    /// the expression.
    fn parse_assignment(&mut self) -> Result<Option<Node>, ParseError> {
        let TokenKind::Name(target) = self.cursor.current_kind() else {
            return Ok(None);
        };
        let start = self.cursor.current_span();
        let position = self.cursor.position();

        let (indices_close, after) = if self.cursor.peek_kind(1) == &TokenKind::LBracket {
            match self.cursor.matching_close(position + 1) {
                Some(close) => (Some(close), close - position + 1),
                None => return Ok(None),
            }
        } else {
            (None, 1)
        };

        let Some((scope, modifier, width)) = self.assignment_operator(after) else {
            return Ok(None);
        };

        self.cursor.advance();
        let mut indices = Vec::new();
        if indices_close.is_some() {
            indices = self.parse_bracket_args()?;
        }
        for _ in 0..width {
            self.cursor.advance();
        }

        let value = self.parse_expr()?;
        let span = start.merge(value.span);
        let mut children = Vec::with_capacity(indices.len() + 1);
        children.push(value);
        children.extend(indices);
        let assignment = Assignment {
            target: target.clone(),
            scope,
            modifier,
        };
        Ok(Some(Node::new(
            NodeKind::Assignment(assignment),
            children,
            span,
        )))
    }

    /// Assignment operator starting `offset` tokens ahead: its scope, its
    /// modifier verb and how many tokens it spans.
    fn assignment_operator(&self, offset: usize) -> Option<(AssignScope, Option<Verb>, usize)> {
        match self.cursor.peek_kind(offset) {
            TokenKind::Verb(Verb::Colon) => Some((AssignScope::Local, None, 1)),
            TokenKind::DoubleColon => Some((AssignScope::Global, None, 1)),
            TokenKind::Verb(verb) => {
                let colon = self.cursor.peek(offset + 1);
                let glued = colon.kind == TokenKind::Verb(Verb::Colon) && colon.flags.is_adjacent();
                glued.then_some((AssignScope::Local, Some(*verb), 2))
            }
            _ => None,
        }
    }

    /// Fold the terms of an expression from the right.
    fn fold(&self, mut items: Vec<Item>, start: Span) -> Result<Node, ParseError> {
        let span = start.merge(self.cursor.previous_span());
        let Some(last) = items.pop() else {
            return Ok(Node::empty(Span::new(start.start, start.start)));
        };

        let mut acc = match last {
            Item::Noun(noun) => noun,
            Item::Monad(verb) => match items.pop() {
                None => return self.verb_as_noun(verb),
                Some(_) => return Err(ParseError::unexpected("end of expression", verb.span)),
            },
            Item::Verb(verb) => match items.pop() {
                None => return self.verb_as_noun(verb),
                // `1+` projects the verb over its left argument.
                Some(Item::Noun(left)) => {
                    let hole = Node::empty(Span::new(span.end, span.end));
                    Node::call(verb, vec![left, hole], span)
                }
                Some(Item::Verb(_) | Item::Monad(_)) => {
                    return Err(ParseError::unexpected("end of expression", verb.span));
                }
            },
        };

        while let Some(item) = items.pop() {
            acc = match item {
                Item::Noun(callee) => {
                    let span = callee.span.merge(acc.span);
                    Node::call(callee, vec![acc], span)
                }
                Item::Monad(verb) => apply(verb, vec![acc]),
                Item::Verb(verb) => match items.pop() {
                    Some(Item::Noun(left)) => apply(verb, vec![left, acc]),
                    Some(other) => {
                        items.push(other);
                        apply(verb, vec![acc])
                    }
                    None => apply(verb, vec![acc]),
                },
            };
        }
        Ok(acc)
    }

    /// A verb standing alone is a value. Plain verbs stay as unapplied verb
    /// nodes; derived verbs become an equivalent function literal.
    fn verb_as_noun(&self, verb: Node) -> Result<Node, ParseError> {
        let NodeKind::BinaryOp(Operator::Adverb(adverb)) = verb.kind else {
            return Ok(verb);
        };
        let text = verb.span.slice(self.source);
        let source = if adverb.derives_monadic() {
            format!("{{{text}x}}")
        } else {
            format!("{{x {text} y}}")
        };
        tracing::debug!(%source, "derived verb as function");
        let literal = crate::parse_function(&source)?;
        Ok(Node::new(NodeKind::Function(literal), Vec::new(), verb.span))
    }
}

/// Supply operands to an unapplied verb node.
fn apply(mut verb: Node, operands: Vec<Node>) -> Node {
    let mut span = verb.span;
    for operand in &operands {
        span = span.merge(operand.span);
    }
    verb.children.extend(operands);
    verb.span = span;
    verb
}
