use pretty_assertions::assert_eq;

use super::{run, run_err};
use crate::EvalErrorKind;

#[test]
fn trapped_success() {
    assert_eq!(run(".[+;1 2;:]"), "0 3");
    assert_eq!(run("@[{x*2};4;:]"), "0 8");
}

#[test]
fn trapped_failure_returns_message() {
    assert_eq!(run("@[{1%x};0;:]"), "(1;\"Division by zero\")");
    assert_eq!(run("r:.[{x+y};(1;`a);:];*r"), "1");
}

#[test]
fn oversized_counts_are_trapped() {
    assert!(matches!(
        run_err("9223372036854775806j#1"),
        EvalErrorKind::Domain { .. }
    ));
    assert_eq!(run("*.[#;(9223372036854775806j;1);:]"), "1");
    assert_eq!(run("*@[{&x};,9223372036854775806j;:]"), "1");
    assert_eq!(run("*.[$;(9223372036854775806j;\"a\");:]"), "1");
}

#[test]
fn trap_does_not_catch_stack_overflow() {
    assert!(matches!(
        run_err("f:{f x};@[f;0;:]"),
        EvalErrorKind::StackOverflow { .. }
    ));
}

#[test]
fn at_and_dot_apply_functions() {
    assert_eq!(run("{x+1}@5"), "6");
    assert_eq!(run("f:+;f . 1 2"), "3");
}

#[test]
fn at_and_dot_index() {
    assert_eq!(run("10 20 30@1"), "20");
    assert_eq!(run("(1 2;3 4) . 1 0"), "3");
}

#[test]
fn amend_with_function() {
    assert_eq!(run("@[1 2 3;1;{x*10}]"), "1 20 3");
    assert_eq!(run("@[1 2 3;0 2;{-x}]"), "-1 2 -3");
}

#[test]
fn amend_with_argument() {
    assert_eq!(run("@[1 2 3;1;+;10]"), "1 12 3");
    assert_eq!(run("@[1 2 3;0 1;:;7 8]"), "7 8 3");
    assert_eq!(run(".[(1 2;3 4);1 0;:;9]"), "(1 2;9 4)");
}

#[test]
fn amend_out_of_range() {
    assert_eq!(
        run_err("@[1 2 3;5;:;0]"),
        EvalErrorKind::IndexOutOfBounds { index: 5 }
    );
}

#[test]
fn amend_dictionary() {
    assert_eq!(run("d[`a]:1;e:@[d;`a;+;5];e[`a]"), "6");
    assert_eq!(run("d[`a]:1;e:@[d;`b;:;2];!e"), "`a`b");
}

#[test]
fn amend_leaves_original_untouched() {
    assert_eq!(run("x:1 2 3;y:@[x;0;:;9];x"), "1 2 3");
}
