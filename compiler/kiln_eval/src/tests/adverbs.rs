use pretty_assertions::assert_eq;

use super::{run, run_err};
use crate::EvalErrorKind;

#[test]
fn over_and_scan() {
    assert_eq!(run("+/1 2 3"), "6");
    assert_eq!(run("+\\1 2 3"), "1 3 6");
    assert_eq!(run("10+/1 2"), "13");
    assert_eq!(run("10+\\1 2"), "10 11 13");
    assert_eq!(run("0*/1 2 3"), "6");
    assert_eq!(run("0+\\1 2 3"), "1 3 6");
    assert_eq!(run("0*/!0"), "1");
    assert_eq!(run("0j*/1 2 3"), "0j");
    assert_eq!(run("{x*y}/1 2 3 4"), "24");
}

#[test]
fn over_empty_without_seed() {
    assert_eq!(run("+/!0"), "0");
    assert_eq!(run("*/!0"), "1");
    assert_eq!(run("-/!0"), "0");
    assert_eq!(run("7+/!0"), "7");
}

#[test]
fn over_atom() {
    assert_eq!(run("+/5"), "5");
}

#[test]
fn converge() {
    assert_eq!(run("{_ x%2}/100"), "0");
    assert_eq!(run("{_ x%2}\\10"), "10 5 2 1 0");
}

#[test]
fn repeat_and_while() {
    assert_eq!(run("3{x*2}/1"), "8");
    assert_eq!(run("3{x*2}\\1"), "1 2 4 8");
    assert_eq!(run("0{x+1}/5"), "5");
    assert_eq!(run("{x<100}{x*2}/1"), "128");
}

#[test]
fn each_forms() {
    assert_eq!(run("#'(1 2;3 4 5)"), "2 3");
    assert_eq!(run("{x*x}'1 2 3"), "1 4 9");
    assert_eq!(run("1 2,'3 4"), "(1 3;2 4)");
    assert_eq!(run("1 2+'10"), "11 12");
}

#[test]
fn each_length_mismatch() {
    assert_eq!(
        run_err("1 2,'3 4 5"),
        EvalErrorKind::Length { left: 2, right: 3 }
    );
}

#[test]
fn each_right_and_left() {
    assert_eq!(run("1 2,/:3 4"), "(1 3 4;2 3 4)");
    assert_eq!(run("1 2,\\:3 4"), "(1 2 3;1 2 4)");
}

#[test]
fn each_prior() {
    assert_eq!(run("-':1 4 9"), "3 5");
    assert_eq!(run("0-':1 4 9"), "3 5");
    assert_eq!(run("0 {x-y}':1 3 6"), "2 3");
}

#[test]
fn derived_verb_as_value() {
    assert_eq!(run("g:+/;g 1 2 3"), "6");
    assert_eq!(run("+/[10;1 2]"), "13");
}

#[test]
fn nested_adverbs() {
    assert_eq!(run("+/'(1 2;3 4 5)"), "3 12");
}
