use super::*;
use kiln_value::compare::matches;
use kiln_value::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn round_trip(value: &Value) -> Value {
    let bytes = serialize(value).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"))
}

#[test]
fn atoms_and_sentinels() {
    for value in [
        Value::Int(7),
        Value::Int(Value::INT_NULL),
        Value::Long(-3),
        Value::Float(f64::NAN),
        Value::Float(f64::INFINITY),
        Value::Char(b'\n'),
        Value::symbol("abc"),
        Value::Null,
    ] {
        assert!(matches(&round_trip(&value), &value), "{value}");
    }
}

#[test]
fn empty_vectors_keep_their_tag() {
    let empty = Value::empty(VectorTag::Char);
    let back = round_trip(&empty);
    assert_eq!(back.to_string(), "\"\"");
    assert_eq!(back.vector_tag(), Some(VectorTag::Char));
}

#[test]
fn nested_lists_and_dictionaries() {
    let mut attributes = Dictionary::new();
    attributes.insert("doc", Value::string("a number"));
    let mut dict = Dictionary::new();
    dict.insert_with_attributes("a", Value::Int(1), Some(attributes));
    dict.insert(
        "b",
        Value::vector(vec![Value::string("xy"), Value::int_vector([1, 2])]),
    );
    let value = Value::dictionary(dict);
    let back = round_trip(&value);
    assert_eq!(back, value);
    let entry = back.as_dictionary().and_then(|d| d.entry("a")).cloned();
    assert_eq!(
        entry.and_then(|e| e.attributes).map(|a| a.len()),
        Some(1)
    );
}

#[test]
fn functions_travel_as_source() {
    let def = FunctionDef::new(vec!["x".into(), "y".into()], "{x+y}".into(), None);
    let f = FunctionValue::new(def).with_branch(Some(".a".into()));
    let projection = f.project(vec![Some(Value::Int(3)), None]);
    let back = round_trip(&Value::Function(projection));
    let Value::Function(g) = back else {
        panic!("expected a function, got {back}");
    };
    assert_eq!(g.source(), "{x+y}");
    assert_eq!(g.branch(), Some(".a"));
    assert_eq!(g.valence(), 1);
    assert!(g.def().cached_body().is_none());
}

#[test]
fn garbage_is_a_domain_error() {
    let err = deserialize(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Domain { .. }));
}

fn atom() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::Int),
        any::<i64>().prop_map(Value::Long),
        any::<f64>().prop_map(Value::Float),
        any::<u8>().prop_map(Value::Char),
        "[a-z]{1,6}".prop_map(|s| Value::symbol(&s)),
        Just(Value::Null),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    atom().prop_recursive(3, 24, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Value::vector)
    })
}

proptest! {
    #[test]
    fn decode_of_encode_matches(value in nested()) {
        prop_assert!(matches(&round_trip(&value), &value));
    }
}
