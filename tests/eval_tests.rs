// Tests for the constrained expression/condition evaluator

use snipstep::eval::{evaluate_condition, evaluate_expression};
use snipstep::state::value::Value;
use snipstep::state::{DeclaredType, ExecutionState, VarSlot};

fn sample_state() -> ExecutionState {
    let mut state = ExecutionState::new();
    state.variables.insert(
        "i".to_string(),
        VarSlot {
            declared_type: DeclaredType::Int,
            value: Value::Num(2.0),
        },
    );
    state.variables.insert(
        "name".to_string(),
        VarSlot {
            declared_type: DeclaredType::Text,
            value: Value::Str("abc".to_string()),
        },
    );
    state
        .arrays
        .insert("nums".to_string(), vec![2.0, 7.0, 11.0, 15.0]);
    state
}

#[test]
fn test_arithmetic_precedence() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("2 + 3 * 4", &state).unwrap(),
        Value::Num(14.0)
    );
    assert_eq!(
        evaluate_expression("(2 + 3) * 4", &state).unwrap(),
        Value::Num(20.0)
    );
    assert_eq!(
        evaluate_expression("10 % 4", &state).unwrap(),
        Value::Num(2.0)
    );
}

#[test]
fn test_division_is_not_truncated() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("7 / 2", &state).unwrap(),
        Value::Num(3.5)
    );
}

#[test]
fn test_variable_and_array_lookups() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("i + 3", &state).unwrap(),
        Value::Num(5.0)
    );
    assert_eq!(
        evaluate_expression("nums[i]", &state).unwrap(),
        Value::Num(11.0)
    );
    assert_eq!(
        evaluate_expression("nums[i + 1]", &state).unwrap(),
        Value::Num(15.0)
    );
}

#[test]
fn test_length_accessor_normalization() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("nums.length", &state).unwrap(),
        Value::Num(4.0)
    );
    assert_eq!(
        evaluate_expression("nums.length()", &state).unwrap(),
        Value::Num(4.0)
    );
    assert_eq!(
        evaluate_expression("nums.size()", &state).unwrap(),
        Value::Num(4.0)
    );
    assert_eq!(
        evaluate_expression("name.length()", &state).unwrap(),
        Value::Num(3.0)
    );
}

#[test]
fn test_numeric_literal_suffixes() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("100L + 1", &state).unwrap(),
        Value::Num(101.0)
    );
    assert_eq!(
        evaluate_expression("1.5f * 2", &state).unwrap(),
        Value::Num(3.0)
    );
}

#[test]
fn test_comparisons_and_logic() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("i < nums.length", &state).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_expression("i >= 3", &state).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_expression("i > 0 && nums[0] == 2", &state).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_expression("i > 5 || i == 2", &state).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_expression("!false", &state).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_unary_minus() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("-i", &state).unwrap(),
        Value::Num(-2.0)
    );
    assert_eq!(
        evaluate_expression("3 - -i", &state).unwrap(),
        Value::Num(5.0)
    );
}

#[test]
fn test_string_concatenation() {
    let state = sample_state();
    assert_eq!(
        evaluate_expression("\"x = \" + i", &state).unwrap(),
        Value::Str("x = 2".to_string())
    );
}

#[test]
fn test_out_of_range_read_is_nan() {
    let state = sample_state();
    let value = evaluate_expression("nums[99]", &state).unwrap();
    match value {
        Value::Num(n) => assert!(n.is_nan()),
        other => panic!("expected NaN, got {:?}", other),
    }
}

#[test]
fn test_unknown_variable_is_an_error() {
    let state = sample_state();
    let err = evaluate_expression("missing + 1", &state).unwrap_err();
    assert_eq!(err.expr, "missing + 1");
}

#[test]
fn test_unsupported_construct_is_rejected() {
    let state = sample_state();
    assert!(evaluate_expression("new int[] { 1, 2 }", &state).is_err());
    assert!(evaluate_expression("foo(1)", &state).is_err());
}

#[test]
fn test_condition_boolean_text_fallback() {
    let state = sample_state();
    assert!(evaluate_condition("true", &state).unwrap());
    assert!(!evaluate_condition("false", &state).unwrap());
    assert!(evaluate_condition("nums[0] == 2", &state).unwrap());
}
