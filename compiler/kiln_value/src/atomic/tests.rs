use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn sum(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        _ => Ok(Value::Null),
    }
}

#[test]
fn vectors_pair_elementwise() {
    let r = dyadic(
        &Value::int_vector([1, 2, 3]),
        &Value::int_vector([4, 5, 6]),
        &sum,
    )
    .unwrap();
    assert_eq!(r, Value::int_vector([5, 7, 9]));
}

#[test]
fn atoms_broadcast() {
    let r = dyadic(&Value::Int(10), &Value::int_vector([1, 2]), &sum).unwrap();
    assert_eq!(r, Value::int_vector([11, 12]));
    let r = dyadic(&Value::int_vector([1, 2]), &Value::Int(10), &sum).unwrap();
    assert_eq!(r, Value::int_vector([11, 12]));
}

#[test]
fn length_mismatch() {
    let err = dyadic(&Value::int_vector([1, 2, 3]), &Value::int_vector([1, 2]), &sum).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Length { left: 3, right: 2 });
}

#[test]
fn nesting_recurses() {
    let nested = Value::vector(vec![Value::int_vector([1, 2]), Value::Int(3)]);
    let r = dyadic(&nested, &Value::Int(1), &sum).unwrap();
    assert_eq!(
        r,
        Value::vector(vec![Value::int_vector([2, 3]), Value::Int(4)])
    );
}

#[test]
fn empty_vectors_keep_their_tag() {
    let r = monadic(&Value::empty(VectorTag::Int), &|v| Ok(v.clone())).unwrap();
    assert_eq!(r.vector_tag(), Some(VectorTag::Int));
    let r = monadic_with_tag(&Value::empty(VectorTag::Int), VectorTag::Float, &|v| Ok(v.clone())).unwrap();
    assert_eq!(r.vector_tag(), Some(VectorTag::Float));
}
