//! Parser tests.
//!
//! - `parser`: expression shapes, assignment forms, lists and literals
//! - `function`: function literals, implicit parameters, deferred bodies

mod parser;

use kiln_ir::{AssignScope, Literal, Node, NodeKind, Operator};

/// Compact prefix rendering of a tree, for readable assertions.
pub(crate) fn sexp(node: &Node) -> String {
    let children = || {
        node.children
            .iter()
            .map(sexp)
            .collect::<Vec<_>>()
            .join(" ")
    };
    match &node.kind {
        NodeKind::Literal(literal) => literal_text(literal),
        NodeKind::Variable(name) => name.clone(),
        NodeKind::Assignment(assignment) => {
            let op = match (assignment.scope, assignment.modifier) {
                (_, Some(verb)) => format!("{verb}:"),
                (AssignScope::Local, None) => ":".to_string(),
                (AssignScope::Global, None) => "::".to_string(),
            };
            let value = sexp(&node.children[0]);
            let indices: Vec<_> = node.children[1..].iter().map(sexp).collect();
            if indices.is_empty() {
                format!("({op} {} {value})", assignment.target)
            } else {
                format!("({op} {}[{}] {value})", assignment.target, indices.join(";"))
            }
        }
        NodeKind::BinaryOp(op) if node.children.is_empty() => op.to_string(),
        NodeKind::BinaryOp(Operator::Verb(verb)) => format!("({verb} {})", children()),
        NodeKind::BinaryOp(Operator::Adverb(adverb)) => format!("({adverb} {})", children()),
        NodeKind::Vector => format!("(list {})", children()).replace("(list )", "(list)"),
        NodeKind::Function(literal) => literal.source.clone(),
        NodeKind::FunctionCall => format!("(call {})", children()),
        NodeKind::Block => format!("(block {})", children()),
        NodeKind::Empty => "_".to_string(),
    }
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Int(i) => i.to_string(),
        Literal::Long(i) => format!("{i}j"),
        Literal::Float(f) => format!("{f:?}"),
        Literal::Char(c) => format!("'{}'", char::from(*c)),
        Literal::Symbol(s) => format!("`{s}"),
        Literal::Str(bytes) => format!("{:?}", String::from_utf8_lossy(bytes)),
        Literal::Vector(items) => {
            let items: Vec<_> = items.iter().map(literal_text).collect();
            format!("[{}]", items.join(" "))
        }
    }
}

pub(crate) fn parsed(source: &str) -> String {
    sexp(&crate::parse(source).unwrap())
}
