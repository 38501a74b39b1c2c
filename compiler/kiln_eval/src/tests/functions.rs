use pretty_assertions::assert_eq;

use super::{run, run_err};
use crate::{EvalErrorKind, Interpreter, InterpreterBuilder};

#[test]
fn implicit_and_explicit_params() {
    assert_eq!(run("{x*2} 21"), "42");
    assert_eq!(run("{x+y+z}[1;2;3]"), "6");
    assert_eq!(run("{[a;b] a-b}[10;3]"), "7");
    assert_eq!(run("{[] 5}[]"), "5");
}

#[test]
fn projection_binds_leading_argument() {
    assert_eq!(run("f:{x+y};g:f[3];g 4"), "7");
}

#[test]
fn projection_with_elided_argument() {
    assert_eq!(run("{x-y}[;1] 10"), "9");
    assert_eq!(run("f:{x,y,z};g:f[;2;];g[1;3]"), "1 2 3");
}

#[test]
fn projection_of_a_verb() {
    assert_eq!(run("p:+[;1];p 5"), "6");
    assert_eq!(run("f:1+;f 5"), "6");
}

#[test]
fn list_argument_spreads_over_parameters() {
    assert_eq!(run("{x+y} 1 2"), "3");
    assert_eq!(run("{x*y} . 3 4"), "12");
}

#[test]
fn too_many_arguments() {
    assert!(matches!(
        run_err("{x}[1;2]"),
        EvalErrorKind::Arity { expected: 1, got: 2 }
    ));
}

#[test]
fn locals_do_not_leak() {
    let mut interp = Interpreter::new();
    interp.eval_source("a:1;f:{a:x;a*2}").unwrap();
    assert_eq!(interp.eval_source("f 5").unwrap().to_string(), "10");
    assert_eq!(interp.eval_source("a").unwrap().to_string(), "1");
}

#[test]
fn callee_sees_caller_frames() {
    assert_eq!(run("g:{y+x};f:{y:100;g[x;1]};f 2"), "3");
    assert_eq!(run("g:{w};f:{w:7;g 0};f 1"), "7");
}

#[test]
fn recursion() {
    assert_eq!(run("fact:{:[x<2;1;x*fact x-1]};fact 5"), "120");
    assert_eq!(run("fib:{:[x<2;x;fib[x-1]+fib x-2]};fib 15"), "610");
}

#[test]
fn call_depth_limit() {
    let mut interp = InterpreterBuilder::new().max_call_depth(50).build();
    let err = interp.eval_source("f:{f x};f 0").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { limit: 50 });
    assert_eq!(interp.env().depth(), 0);
    assert_eq!(interp.eval_source("1+1").unwrap().to_string(), "2");
}

#[test]
fn deep_recursion_with_default_limit() {
    assert!(matches!(
        run_err("f:{f x};f 0"),
        EvalErrorKind::StackOverflow { .. }
    ));
    assert_eq!(run("f:{:[x;f x-1;`done]};f 1000"), "`done");
}

#[test]
fn deferred_body_fails_when_called() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.eval_source("f:{1+)};2").unwrap().to_string(), "2");
    let err = interp.eval_source("f 1").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ParseDeferred { .. }));
}

#[test]
fn empty_body() {
    assert_eq!(run("{}[]"), "0");
}

#[test]
fn functions_display_their_source() {
    assert_eq!(run("{x+y}"), "{x+y}");
    assert_eq!(run("f:{x+1};f"), "{x+1}");
}
