use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn vectors_add_pointwise() {
    let r = add(&Value::int_vector([1, 2, 3]), &Value::int_vector([4, 5, 6])).unwrap();
    assert_eq!(r, Value::int_vector([5, 7, 9]));
}

#[test]
fn vector_length_mismatch() {
    let err = add(&Value::int_vector([1, 2, 3]), &Value::int_vector([4, 5])).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Length { left: 3, right: 2 });
}

#[test]
fn int_overflow_wraps() {
    assert_eq!(
        add(&Value::Int(i32::MAX - 1), &Value::Int(3)).unwrap(),
        Value::Int((i32::MAX - 1).wrapping_add(3))
    );
    assert_eq!(
        multiply(&Value::Int(65536), &Value::Int(65536)).unwrap(),
        Value::Int(0)
    );
}

#[test]
fn mixed_widths_promote() {
    assert_eq!(add(&Value::Int(1), &Value::Long(2)).unwrap(), Value::Long(3));
    assert_eq!(add(&Value::Long(1), &Value::Float(0.5)).unwrap(), Value::Float(1.5));
    assert_eq!(subtract(&Value::Float(2.0), &Value::Int(1)).unwrap(), Value::Float(1.0));
}

#[test]
fn promotion_keeps_sentinels() {
    assert_eq!(int_to_long(Value::INT_NULL), Value::LONG_NULL);
    assert_eq!(int_to_long(Value::INT_INF), Value::LONG_INF);
    assert_eq!(int_to_long(Value::INT_NEG_INF), Value::LONG_NEG_INF);
    assert!(int_to_float(Value::INT_NULL).is_nan());
    assert_eq!(long_to_float(Value::LONG_NEG_INF), f64::NEG_INFINITY);
    let r = add(&Value::Int(Value::INT_INF), &Value::Float(1.0)).unwrap();
    assert_eq!(r, Value::Float(f64::INFINITY));
}

#[test]
fn exact_integer_division_stays_integral() {
    assert_eq!(divide(&Value::Int(10), &Value::Int(2)).unwrap(), Value::Int(5));
    assert_eq!(divide(&Value::Long(9), &Value::Int(3)).unwrap(), Value::Long(3));
}

#[test]
fn inexact_integer_division_is_float() {
    let Value::Float(f) = divide(&Value::Int(10), &Value::Int(3)).unwrap() else {
        panic!("expected a float");
    };
    assert!((f - 10.0 / 3.0).abs() < 1e-12);
}

#[test]
fn division_by_zero_raises_for_every_type() {
    for (x, y) in [
        (Value::Int(1), Value::Int(0)),
        (Value::Long(1), Value::Long(0)),
        (Value::Float(1.0), Value::Float(0.0)),
        (Value::Int(1), Value::Float(0.0)),
    ] {
        let err = divide(&x, &y).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }
    assert_eq!(
        reciprocal(&Value::Int(0)).unwrap_err().kind,
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn symbols_do_not_add() {
    let err = add(&Value::symbol("a"), &Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Type { .. }));
}

#[test]
fn min_max() {
    assert_eq!(
        min(&Value::int_vector([1, 5]), &Value::Int(3)).unwrap(),
        Value::int_vector([1, 3])
    );
    assert_eq!(max(&Value::Int(1), &Value::Float(2.5)).unwrap(), Value::Float(2.5));
    assert_eq!(max(&Value::Char(b'a'), &Value::Char(b'c')).unwrap(), Value::Char(b'c'));
}

#[test]
fn modulo_follows_the_divisor_sign() {
    assert_eq!(modulo(&Value::Int(7), &Value::Int(3)).unwrap(), Value::Int(1));
    assert_eq!(modulo(&Value::Int(-7), &Value::Int(3)).unwrap(), Value::Int(2));
    assert_eq!(modulo(&Value::Int(7), &Value::Int(-3)).unwrap(), Value::Int(-2));
    assert_eq!(
        modulo(&Value::Int(1), &Value::Int(0)).unwrap_err().kind,
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn power_is_float() {
    assert_eq!(power(&Value::Int(2), &Value::Int(10)).unwrap(), Value::Float(1024.0));
}

#[test]
fn negate_and_reciprocal() {
    assert_eq!(negate(&Value::int_vector([1, -2])).unwrap(), Value::int_vector([-1, 2]));
    assert_eq!(reciprocal(&Value::Int(4)).unwrap(), Value::Float(0.25));
    assert_eq!(
        reciprocal(&Value::empty(VectorTag::Int)).unwrap().vector_tag(),
        Some(VectorTag::Float)
    );
}

#[test]
fn floor_maps_float_sentinels() {
    assert_eq!(floor(&Value::Float(2.7)).unwrap(), Value::Int(2));
    assert_eq!(floor(&Value::Float(-2.5)).unwrap(), Value::Int(-3));
    assert_eq!(floor(&Value::Float(f64::NAN)).unwrap(), Value::Int(Value::INT_NULL));
    assert_eq!(floor(&Value::Float(f64::INFINITY)).unwrap(), Value::Int(Value::INT_INF));
    assert_eq!(floor(&Value::Float(1e12)).unwrap(), Value::Long(1_000_000_000_000));
    assert_eq!(floor(&Value::Int(7)).unwrap(), Value::Int(7));
}

#[test]
fn not_is_zero_test() {
    assert_eq!(
        not(&Value::int_vector([0, 1, 2])).unwrap(),
        Value::int_vector([1, 0, 0])
    );
    assert_eq!(not(&Value::Float(0.0)).unwrap(), Value::Int(1));
}

#[test]
fn abs_keeps_integer_type() {
    assert_eq!(abs(&Value::Int(-3)).unwrap(), Value::Int(3));
    assert_eq!(abs(&Value::Long(-3)).unwrap(), Value::Long(3));
    assert_eq!(abs(&Value::Int(Value::INT_NULL)).unwrap(), Value::Int(Value::INT_NULL));
}

#[test]
fn float_math_vectorizes() {
    let r = float_math("_sqrt", &Value::int_vector([4, 9]), f64::sqrt).unwrap();
    assert_eq!(r, Value::vector(vec![Value::Float(2.0), Value::Float(3.0)]));
}

proptest! {
    #[test]
    fn int_add_matches_wrapping(a: i32, b: i32) {
        prop_assert_eq!(add(&Value::Int(a), &Value::Int(b)).unwrap(), Value::Int(a.wrapping_add(b)));
    }

    #[test]
    fn exact_division_round_trips(a in -10_000i32..10_000, b in 1i32..100) {
        let product = a * b;
        prop_assert_eq!(divide(&Value::Int(product), &Value::Int(b)).unwrap(), Value::Int(a));
    }

    #[test]
    fn modulo_is_below_positive_divisor(a: i32, b in 1i32..1000) {
        let Value::Int(r) = modulo(&Value::Int(a), &Value::Int(b)).unwrap() else {
            panic!("expected an int");
        };
        prop_assert!((0..b).contains(&r));
    }
}
