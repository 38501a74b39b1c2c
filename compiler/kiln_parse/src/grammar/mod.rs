//! Grammar productions, split by what they parse.
//!
//! - `expr`: statements, expressions, assignment and the right-to-left fold
//! - `noun`: literals, names, parenthesized lists, bracket arguments
//! - `function`: function literals and their parameter lists

mod expr;
mod function;
mod noun;

use kiln_ir::Node;

/// One term of an expression before folding.
#[derive(Debug)]
enum Item {
    Noun(Node),
    /// Verb or derived verb, unapplied.
    Verb(Node),
    /// Verb followed by `:`, which never takes a left argument.
    Monad(Node),
}
