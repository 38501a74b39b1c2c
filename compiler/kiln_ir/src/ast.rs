//! Abstract syntax tree.
//!
//! The tree is deliberately uniform: a [`Node`] is a kind, a list of ordered
//! children and a span. Kinds carry the literal payload the evaluator needs
//! (the constant for a `Literal`, the name for a `Variable`, the parsed
//! function for a `Function`) so no side tables are required.
//!
//! # Children by kind
//!
//! | Kind           | Children                                                   |
//! |----------------|------------------------------------------------------------|
//! | `Literal`      | none                                                       |
//! | `Variable`     | none                                                       |
//! | `Assignment`   | `[value]`, or `[value, index...]` for `x[i]:v`             |
//! | `BinaryOp`     | verb: `[]`, `[x]` or `[x, y]`; adverb: `[f]`, `[f, y]`, `[f, x, y]` |
//! | `Vector`       | the list items                                             |
//! | `Function`     | none (body lives in the literal)                           |
//! | `FunctionCall` | `[callee, arg...]`, elided args are `Empty`                |
//! | `Block`        | the statements                                             |
//! | `Empty`        | none                                                       |
//!
//! A verb node with no children, or an adverb node with only its operand, is
//! an unapplied verb: it appears as a call target (`+[1;2]`, `+/[0;x]`) or as
//! an argument (`.[+;1 2;:]`).

use std::fmt;
use std::sync::Arc;

use crate::{Adverb, Span, Verb};

/// Compile-time constant.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i32),
    Long(i64),
    Float(f64),
    Char(u8),
    Symbol(String),
    /// Character vector (`"abc"`); a one-byte string literal is a `Char`.
    Str(Vec<u8>),
    /// Vector of atoms from adjacent numbers or symbols (`1 2 3`, `` `a`b ``).
    Vector(Vec<Literal>),
}

/// Operator carried by a `BinaryOp` node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Verb(Verb),
    Adverb(Adverb),
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Verb(v) => write!(f, "{v}"),
            Operator::Adverb(a) => write!(f, "{a}"),
        }
    }
}

/// Where an assignment writes when its target is not a dotted path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignScope {
    /// `x:v` binds in the current call frame.
    Local,
    /// `x::v` binds in the root global scope.
    Global,
}

/// Assignment target and flavour.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub scope: AssignScope,
    /// `x+:1` applies `+` to the current value and the right-hand side.
    pub modifier: Option<Verb>,
}

/// A function literal `{[a;b] body}`.
#[derive(Clone, Debug)]
pub struct FunctionLiteral {
    /// Declared or implicit (`x`, `y`, `z`) parameter names.
    pub params: Vec<String>,
    /// Full source text including the braces.
    pub source: String,
    /// Parsed body. `None` when the body failed to parse; the error surfaces
    /// when the function is first called.
    pub body: Option<Arc<Node>>,
}

impl PartialEq for FunctionLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.source == other.source
    }
}

/// Node kind with its attached payload.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Literal(Literal),
    Variable(String),
    Assignment(Assignment),
    BinaryOp(Operator),
    Vector,
    Function(FunctionLiteral),
    FunctionCall,
    Block,
    Empty,
}

/// One AST node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>, span: Span) -> Self {
        Node {
            kind,
            children,
            span,
        }
    }

    pub fn literal(literal: Literal, span: Span) -> Self {
        Node::new(NodeKind::Literal(literal), Vec::new(), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Variable(name.into()), Vec::new(), span)
    }

    pub fn empty(span: Span) -> Self {
        Node::new(NodeKind::Empty, Vec::new(), span)
    }

    /// Unapplied verb, used as a value or call target.
    pub fn verb(verb: Verb, span: Span) -> Self {
        Node::new(NodeKind::BinaryOp(Operator::Verb(verb)), Vec::new(), span)
    }

    /// Whether this is a verb or derived verb still waiting for its operands.
    pub fn is_unapplied(&self) -> bool {
        match self.kind {
            NodeKind::BinaryOp(Operator::Verb(_)) => self.children.is_empty(),
            NodeKind::BinaryOp(Operator::Adverb(_)) => self.children.len() == 1,
            _ => false,
        }
    }

    /// Monadic verb application `v x`.
    pub fn monadic(verb: Verb, arg: Node, span: Span) -> Self {
        Node::new(NodeKind::BinaryOp(Operator::Verb(verb)), vec![arg], span)
    }

    /// Dyadic verb application `x v y`.
    pub fn dyadic(verb: Verb, left: Node, right: Node, span: Span) -> Self {
        Node::new(
            NodeKind::BinaryOp(Operator::Verb(verb)),
            vec![left, right],
            span,
        )
    }

    pub fn call(callee: Node, args: Vec<Node>, span: Span) -> Self {
        let mut children = Vec::with_capacity(args.len() + 1);
        children.push(callee);
        children.extend(args);
        Node::new(NodeKind::FunctionCall, children, span)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    /// Name of a `Variable` node.
    pub fn as_variable(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Walk the tree depth-first, calling `f` on every node.
    pub fn walk(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_places_callee_first() {
        let node = Node::call(
            Node::variable("f", Span::new(0, 1)),
            vec![Node::empty(Span::DUMMY), Node::literal(Literal::Int(4), Span::DUMMY)],
            Span::new(0, 6),
        );
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0].as_variable(), Some("f"));
        assert!(node.children[1].is_empty());
    }

    #[test]
    fn walk_visits_every_node() {
        let tree = Node::dyadic(
            Verb::Plus,
            Node::variable("x", Span::DUMMY),
            Node::monadic(Verb::Minus, Node::variable("y", Span::DUMMY), Span::DUMMY),
            Span::DUMMY,
        );
        let mut names = Vec::new();
        tree.walk(&mut |n| {
            if let Some(name) = n.as_variable() {
                names.push(name.to_string());
            }
        });
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn unapplied_verbs() {
        let plus = Node::verb(Verb::Plus, Span::DUMMY);
        assert!(plus.is_unapplied());
        let over = Node::new(
            NodeKind::BinaryOp(Operator::Adverb(Adverb::Over)),
            vec![plus.clone()],
            Span::DUMMY,
        );
        assert!(over.is_unapplied());
        assert!(!Node::monadic(Verb::Plus, plus, Span::DUMMY).is_unapplied());
    }

    #[test]
    fn function_literals_compare_by_source() {
        let a = FunctionLiteral {
            params: vec!["x".into()],
            source: "{x}".into(),
            body: None,
        };
        let b = FunctionLiteral {
            body: Some(Arc::new(Node::variable("x", Span::DUMMY))),
            ..a.clone()
        };
        assert_eq!(a, b);
    }
}
