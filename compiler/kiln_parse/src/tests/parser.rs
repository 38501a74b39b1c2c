use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::parsed;
use crate::{parse, ParseError};

#[test]
fn right_to_left_evaluation_order() {
    assert_eq!(parsed("2*3+4"), "(* 2 (+ 3 4))");
    assert_eq!(parsed("1-2-3"), "(- 1 (- 2 3))");
}

#[test]
fn monadic_verbs_without_left_noun() {
    assert_eq!(parsed("- 1 2"), "(- [1 2])");
    assert_eq!(parsed("-1 2"), "[-1 2]");
    assert_eq!(parsed("#!5"), "(# (! 5))");
    assert_eq!(parsed("x+-y"), "(+ x (- y))");
}

#[test]
fn negative_literals_stay_literals() {
    assert_eq!(parsed("-1"), "-1");
    assert_eq!(parsed("2*-1"), "(* 2 -1)");
    assert_eq!(parsed("1 -2 3"), "[1 -2 3]");
}

#[test]
fn number_vectors_promote() {
    assert_eq!(parsed("1 2 3"), "[1 2 3]");
    assert_eq!(parsed("1 2.5"), "[1.0 2.5]");
    assert_eq!(parsed("1 2j"), "[1j 2j]");
    assert_eq!(parsed("0I 1.0"), "[inf 1.0]");
}

#[test]
fn strings_chars_and_symbols() {
    assert_eq!(parsed("\"a\""), "'a'");
    assert_eq!(parsed("\"ab\""), "\"ab\"");
    assert_eq!(parsed("`a"), "`a");
    assert_eq!(parsed("`a`b `c"), "[`a `b `c]");
}

#[test]
fn lists_and_grouping() {
    assert_eq!(parsed("()"), "(list)");
    assert_eq!(parsed("(1)"), "1");
    assert_eq!(parsed("(1;\"ab\")"), "(list 1 \"ab\")");
    assert_eq!(parsed("(1;;2)"), "(list 1 _ 2)");
    assert_eq!(parsed("(1+2)*3"), "(* (+ 1 2) 3)");
}

#[test]
fn application_by_juxtaposition() {
    assert_eq!(parsed("f x"), "(call f x)");
    assert_eq!(parsed("f g 1"), "(call f (call g 1))");
    assert_eq!(parsed("v 1+2"), "(call v (+ 1 2))");
}

#[test]
fn bracket_calls() {
    assert_eq!(parsed("f[1;2]"), "(call f 1 2)");
    assert_eq!(parsed("f[;4]"), "(call f _ 4)");
    assert_eq!(parsed("f[]"), "(call f)");
    assert_eq!(parsed("m[1][2]"), "(call (call m 1) 2)");
    assert_eq!(parsed("+[1;2]"), "(call + 1 2)");
}

#[test]
fn adverbs_monadic_and_dyadic() {
    assert_eq!(parsed("+/1 2 3"), "(/ + [1 2 3])");
    assert_eq!(parsed("0+/1 2"), "(/ + 0 [1 2])");
    assert_eq!(parsed("1 2,'3 4"), "(' , [1 2] [3 4])");
    assert_eq!(parsed("x,/:y"), "(/: , x y)");
    assert_eq!(parsed("f'x"), "(' f x)");
    assert_eq!(parsed("{x+y}/1 2"), "(/ {x+y} [1 2])");
    assert_eq!(parsed("x,/:\\:y"), "(\\: (/: ,) x y)");
}

#[test]
fn derived_verb_call_target() {
    assert_eq!(parsed("+/[10;1 2]"), "(call (/ +) 10 [1 2])");
}

#[test]
fn lone_verbs_are_values() {
    assert_eq!(parsed("+"), "+");
    assert_eq!(parsed("f[+;1]"), "(call f + 1)");
    assert_eq!(parsed(".[+;1 2;:]"), "(call . + [1 2] :)");
}

#[test]
fn lone_derived_verb_becomes_function() {
    assert_eq!(parsed("g:+/"), "(: g {+/x})");
    assert_eq!(parsed("(,')"), "{x ,' y}");
}

#[test]
fn trailing_verb_projects() {
    assert_eq!(parsed("1+"), "(call + 1 _)");
}

#[test]
fn assignment_forms() {
    assert_eq!(parsed("a:1+2"), "(: a (+ 1 2))");
    assert_eq!(parsed("a::5"), "(:: a 5)");
    assert_eq!(parsed("a+:1"), "(+: a 1)");
    assert_eq!(parsed("a[1]:5"), "(: a[1] 5)");
    assert_eq!(parsed("a[1;2],:5"), "(,: a[1;2] 5)");
    assert_eq!(parsed(".k.x:1"), "(: .k.x 1)");
    assert_eq!(parsed("1+a:2"), "(+ 1 (: a 2))");
}

#[test]
fn indexing_without_colon_is_a_call() {
    assert_eq!(parsed("a[1]+2"), "(+ (call a 1) 2)");
}

#[test]
fn monadic_colon_is_a_verb() {
    assert_eq!(parsed(":x"), "(: x)");
}

#[test]
fn glued_colon_forces_the_monadic_form() {
    assert_eq!(parsed("*:1 2"), "(* [1 2])");
    assert_eq!(parsed("x,#:y"), "(, x (# y))");
    assert_eq!(parsed("x+:1"), "(+: x 1)");
}

#[test]
fn conditional_and_control_words() {
    assert_eq!(parsed(":[a;1;2]"), "(call : a 1 2)");
    assert_eq!(parsed("if[a;b:1]"), "(call if a (: b 1))");
    assert_eq!(parsed("r: :[1;2;3]"), "(: r (call : 1 2 3))");
}

#[test]
fn statements_make_blocks() {
    assert_eq!(parsed("a:1;a+1"), "(block (: a 1) (+ a 1))");
    assert_eq!(parsed("a:1\n\nb:2\n"), "(block (: a 1) (: b 2))");
    assert_eq!(parsed(""), "_");
    assert_eq!(parsed("1 / comment"), "1");
}

#[test]
fn stray_closer_is_an_error() {
    assert!(matches!(
        parse("1)"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn unclosed_paren() {
    let err = parse("(1;2").unwrap_err();
    assert!(matches!(err, ParseError::Unclosed { delimiter: '(', .. }));
    assert_eq!(err.span().start, 0);
}

#[test]
fn adverb_without_operand() {
    assert!(matches!(
        parse("/:1"),
        Err(ParseError::MissingOperand { .. })
    ));
}

#[test]
fn lex_errors_pass_through() {
    assert!(matches!(parse("\"abc"), Err(ParseError::Lex(_))));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parsed(&source), "1");
}

proptest! {
    #[test]
    fn sums_fold_to_the_right(values in proptest::collection::vec(0..100i32, 1..8)) {
        let source = values.iter().map(ToString::to_string).collect::<Vec<_>>().join("+");
        let mut expected = values.last().unwrap().to_string();
        for v in values.iter().rev().skip(1) {
            expected = format!("(+ {v} {expected})");
        }
        prop_assert_eq!(parsed(&source), expected);
    }
}
