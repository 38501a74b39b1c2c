use super::*;
use pretty_assertions::assert_eq;

#[test]
fn atom_type_codes() {
    assert_eq!(Value::Int(1).type_code(), 1);
    assert_eq!(Value::Float(1.0).type_code(), 2);
    assert_eq!(Value::Char(b'a').type_code(), 3);
    assert_eq!(Value::symbol("a").type_code(), 4);
    assert_eq!(Value::dictionary(Dictionary::new()).type_code(), 5);
    assert_eq!(Value::Null.type_code(), 6);
    assert_eq!(Value::Long(1).type_code(), 8);
}

#[test]
fn vector_type_codes() {
    assert_eq!(Value::int_vector([1, 2, 3]).type_code(), -1);
    assert_eq!(Value::string("ab").type_code(), -3);
    assert_eq!(
        Value::vector(vec![Value::Int(1), Value::Float(2.0)]).type_code(),
        0
    );
    assert_eq!(Value::vector(vec![Value::Int(1), Value::Null]).type_code(), 0);
    assert_eq!(Value::empty(VectorTag::Float).type_code(), -2);
    assert_eq!(Value::empty(VectorTag::General).type_code(), 0);
}

#[test]
fn typed_vector_infers_non_empty_tags() {
    let v = Value::typed_vector(vec![Value::Float(1.0)], VectorTag::Int);
    assert_eq!(v.vector_tag(), Some(VectorTag::Float));
    let v = Value::typed_vector(Vec::new(), VectorTag::Symbol);
    assert_eq!(v.vector_tag(), Some(VectorTag::Symbol));
}

#[test]
fn element_tag_of_atoms_and_vectors() {
    assert_eq!(Value::Char(b'a').element_tag(), VectorTag::Char);
    assert_eq!(Value::string("abc").element_tag(), VectorTag::Char);
    assert_eq!(Value::empty(VectorTag::Long).element_tag(), VectorTag::Long);
    assert_eq!(Value::Null.element_tag(), VectorTag::General);
}

#[test]
fn empty_vectors_compare_tags() {
    assert_ne!(Value::empty(VectorTag::Int), Value::empty(VectorTag::Char));
    assert_eq!(Value::empty(VectorTag::Int), Value::int_vector([]));
}

#[test]
fn nan_equals_itself_structurally() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Int(1), Value::Long(1));
}

#[test]
fn counts() {
    assert_eq!(Value::int_vector([1, 2]).count(), 2);
    assert_eq!(Value::Int(9).count(), 1);
    let dict: Dictionary = [("a".to_string(), Value::Null)].into_iter().collect();
    assert_eq!(Value::dictionary(dict).count(), 1);
}

#[test]
fn as_bytes_reads_strings() {
    assert_eq!(Value::string("hi").as_bytes(), Some(b"hi".to_vec()));
    assert_eq!(Value::Char(b'x').as_bytes(), Some(vec![b'x']));
    assert_eq!(Value::int_vector([1]).as_bytes(), None);
    assert_eq!(Value::empty(VectorTag::Int).as_bytes(), None);
}

#[test]
fn truthiness() {
    assert!(Value::Int(2).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::symbol("a").is_truthy());
}

#[test]
fn dictionary_keeps_insertion_order() {
    let mut dict = Dictionary::new();
    dict.insert("b", Value::Int(1));
    dict.insert("a", Value::Int(2));
    dict.insert("b", Value::Int(3));
    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(dict.get("b"), Some(&Value::Int(3)));
    assert_eq!(dict.len(), 2);
}

#[test]
fn function_projection_slots() {
    let f = FunctionValue::new(FunctionDef::new(
        vec!["x".into(), "y".into(), "z".into()],
        "{x+y+z}".into(),
        None,
    ));
    assert_eq!(f.valence(), 3);
    let p = f.project(f.fill(vec![None, Some(Value::Int(2))]));
    assert!(p.is_projection());
    assert_eq!(p.valence(), 2);
    assert!(p.same_definition(&f));
    let slots = p.fill(vec![Some(Value::Int(1)), Some(Value::Int(3))]);
    assert_eq!(
        slots,
        vec![Some(Value::Int(1)), Some(Value::Int(2)), Some(Value::Int(3))]
    );
}

#[test]
fn body_cache_is_shared_by_clones() {
    let f = FunctionValue::new(FunctionDef::new(vec!["x".into()], "{x}".into(), None));
    let g = f.clone();
    assert!(f.def().cached_body().is_none());
    f.def().cache_body(std::sync::Arc::new(kiln_ir::Node::empty(kiln_ir::Span::DUMMY)));
    assert!(g.def().cached_body().is_some());
    let h = FunctionValue::new(FunctionDef::new(vec!["x".into()], "{x}".into(), None));
    assert!(h.def().cached_body().is_none());
    assert!(!h.same_definition(&f));
}
