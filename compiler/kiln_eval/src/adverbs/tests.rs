use super::*;
use crate::verbs;
use kiln_value::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ints(items: &[i32]) -> Value {
    Value::int_vector(items.iter().copied())
}

fn verb(v: Verb) -> impl FnMut(&Value, &Value) -> EvalResult {
    move |x, y| verbs::dyadic(v, x, y)
}

#[test]
fn reduce_without_seed_starts_at_first() {
    let r = over(&mut verb(Verb::Plus), None, &ints(&[1, 2, 3, 4]), &identity(Some(Verb::Plus)));
    assert_eq!(r.unwrap(), Value::Int(10));
}

#[test]
fn reduce_empty_yields_identity() {
    let empty = Value::empty(VectorTag::Int);
    let plus = over(&mut verb(Verb::Plus), None, &empty, &identity(Some(Verb::Plus)));
    let times = over(&mut verb(Verb::Star), None, &empty, &identity(Some(Verb::Star)));
    let minus = over(&mut verb(Verb::Minus), None, &empty, &identity(Some(Verb::Minus)));
    assert_eq!(plus.unwrap(), Value::Int(0));
    assert_eq!(times.unwrap(), Value::Int(1));
    assert_eq!(minus.unwrap(), Value::Int(0));
}

#[test]
fn reduce_empty_with_seed_yields_seed() {
    let empty = Value::empty(VectorTag::Int);
    let r = over(&mut verb(Verb::Star), Some(&Value::Int(7)), &empty, &Value::Int(1));
    assert_eq!(r.unwrap(), Value::Int(7));
}

#[test]
fn reduce_folds_from_the_left() {
    let r = over(&mut verb(Verb::Minus), None, &ints(&[10, 1, 2]), &Value::Int(0));
    assert_eq!(r.unwrap(), Value::Int(7));
}

#[test]
fn scan_keeps_partials_seed_first() {
    let r = scan(&mut verb(Verb::Plus), None, &ints(&[1, 2, 3]));
    assert_eq!(r.unwrap(), ints(&[1, 3, 6]));
    let r = scan(&mut verb(Verb::Plus), Some(&Value::Int(10)), &ints(&[1, 2]));
    assert_eq!(r.unwrap(), ints(&[10, 11, 13]));
}

#[test]
fn scan_of_empty_is_empty() {
    let r = scan(&mut verb(Verb::Plus), None, &Value::empty(VectorTag::Int));
    assert_eq!(r.unwrap().to_string(), "!0");
}

#[test]
fn converge_stops_at_fixpoint() {
    let mut halve = |x: &Value| -> EvalResult {
        let half = verbs::dyadic(Verb::Percent, x, &Value::Int(2))?;
        verbs::monadic(Verb::Underscore, &half)
    };
    assert_eq!(converge(&mut halve, &Value::Int(40)).unwrap(), Value::Int(0));
    let steps = converge_scan(&mut halve, &Value::Int(8)).unwrap();
    assert_eq!(steps, ints(&[8, 4, 2, 1, 0]));
}

#[test]
fn converge_stops_when_cycling_back() {
    let mut negate = |x: &Value| verbs::monadic(Verb::Minus, x);
    assert_eq!(converge(&mut negate, &Value::Int(3)).unwrap(), Value::Int(-3));
}

#[test]
fn repeat_applies_n_times() {
    let mut double = |x: &Value| verbs::dyadic(Verb::Star, x, &Value::Int(2));
    assert_eq!(repeat(&mut double, 3, &Value::Int(1)).unwrap(), Value::Int(8));
    assert_eq!(repeat(&mut double, 0, &Value::Int(1)).unwrap(), Value::Int(1));
    assert_eq!(repeat_scan(&mut double, 2, &Value::Int(1)).unwrap(), ints(&[1, 2, 4]));
}

#[test]
fn iterate_while_condition_holds() {
    let mut step = |x: &Value| -> Result<Option<Value>, EvalError> {
        if verbs::dyadic(Verb::Less, x, &Value::Int(10))?.is_truthy() {
            verbs::dyadic(Verb::Star, x, &Value::Int(2)).map(Some)
        } else {
            Ok(None)
        }
    };
    assert_eq!(iterate_while(&mut step, &Value::Int(1)).unwrap(), Value::Int(16));
    assert_eq!(
        iterate_while_scan(&mut step, &Value::Int(3)).unwrap(),
        ints(&[3, 6, 12])
    );
}

#[test]
fn each_maps_and_keeps_empty_type() {
    let mut neg = |x: &Value| verbs::monadic(Verb::Minus, x);
    assert_eq!(each(&mut neg, &ints(&[1, 2])).unwrap(), ints(&[-1, -2]));
    assert_eq!(each(&mut neg, &Value::Int(4)).unwrap(), Value::Int(-4));
    assert_eq!(each(&mut neg, &Value::empty(VectorTag::Int)).unwrap().to_string(), "!0");
}

#[test]
fn each_pair_requires_equal_lengths() {
    let r = each_pair(&mut verb(Verb::Comma), &ints(&[1, 2]), &ints(&[3, 4])).unwrap();
    assert_eq!(r.to_string(), "(1 3;2 4)");
    let err = each_pair(&mut verb(Verb::Plus), &ints(&[1, 2]), &ints(&[3])).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Length { left: 2, right: 1 });
}

#[test]
fn each_pair_broadcasts_atoms() {
    let r = each_pair(&mut verb(Verb::Comma), &Value::Int(0), &ints(&[1, 2])).unwrap();
    assert_eq!(r.to_string(), "(0 1;0 2)");
    let r = each_pair(&mut verb(Verb::Plus), &Value::Int(1), &Value::Int(2)).unwrap();
    assert_eq!(r, Value::Int(3));
}

#[test]
fn each_right_iterates_the_left() {
    let r = each_right(&mut verb(Verb::Comma), &ints(&[1, 2]), &ints(&[9])).unwrap();
    assert_eq!(r.to_string(), "(1 9;2 9)");
    let r = each_right(&mut verb(Verb::Plus), &Value::Int(1), &ints(&[1, 2])).unwrap();
    assert_eq!(r.to_string(), ",(2 3)");
}

#[test]
fn each_left_iterates_the_right() {
    let r = each_left(&mut verb(Verb::Comma), &ints(&[9]), &ints(&[1, 2])).unwrap();
    assert_eq!(r.to_string(), "(9 1;9 2)");
}

#[test]
fn each_prior_pairs_neighbours() {
    let r = each_prior(&mut verb(Verb::Minus), &ints(&[1, 4, 9])).unwrap();
    assert_eq!(r, ints(&[3, 5]));
    let r = each_prior(&mut verb(Verb::Minus), &ints(&[7])).unwrap();
    assert_eq!(r.count(), 0);
}

#[test]
fn callback_errors_propagate() {
    let err = over(&mut verb(Verb::Percent), None, &ints(&[1, 0]), &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

proptest! {
    #[test]
    fn last_of_scan_is_over(items in prop::collection::vec(-1000i32..1000, 1..20)) {
        let x = Value::int_vector(items);
        let total = over(&mut verb(Verb::Plus), None, &x, &Value::Int(0)).unwrap();
        let partials = scan(&mut verb(Verb::Plus), None, &x).unwrap();
        let last = partials.as_vector().and_then(<[Value]>::last).cloned();
        prop_assert_eq!(last, Some(total));
    }

    #[test]
    fn each_prior_has_one_fewer_result(items in prop::collection::vec(-100i32..100, 1..20)) {
        let n = items.len();
        let x = Value::int_vector(items);
        let r = each_prior(&mut verb(Verb::Minus), &x).unwrap();
        prop_assert_eq!(r.count(), n - 1);
    }
}
