use super::*;
use kiln_value::EvalErrorKind;
use pretty_assertions::assert_eq;

fn shown(name: &str, x: &Value) -> String {
    match call(name, x) {
        Ok(value) => value.to_string(),
        Err(err) => panic!("{name} {x}: {err}"),
    }
}

#[test]
fn char_and_int_conversions() {
    assert_eq!(shown("_ic", &Value::string("AB")), "65 66");
    assert_eq!(shown("_ci", &Value::int_vector([104, 105])), "\"hi\"");
    assert_eq!(shown("_ic", &Value::empty(VectorTag::Char)), "!0");
    assert_eq!(shown("_ci", &Value::empty(VectorTag::Int)), "\"\"");
}

#[test]
fn char_code_out_of_range() {
    let err = call("_ci", &Value::Int(300)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Domain { .. }));
    let err = call("_ic", &Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Type { .. }));
}

#[test]
fn math_functions() {
    assert_eq!(shown("_abs", &Value::int_vector([-2, 3])), "2 3");
    assert_eq!(shown("_sqrt", &Value::Int(16)), "4.0");
    assert_eq!(shown("_exp", &Value::Int(0)), "1.0");
    assert_eq!(shown("_log", &Value::Float(1.0)), "0.0");
    assert_eq!(shown("_sin", &Value::Int(0)), "0.0");
    assert_eq!(shown("_cos", &Value::Int(0)), "1.0");
}

#[test]
fn bytes_round_trip() {
    let x = Value::vector(vec![Value::Int(1), Value::string("ab"), Value::symbol("c")]);
    let bytes = call("_bd", &x).unwrap();
    assert_eq!(bytes.vector_tag(), Some(VectorTag::Char));
    assert_eq!(call("_db", &bytes).unwrap(), x);
}

#[test]
fn decode_needs_characters() {
    let err = call("_db", &Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Type { .. }));
}

#[test]
fn unknown_name() {
    let err = call("_foo", &Value::Null).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotSupported { .. }));
}
