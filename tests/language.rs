use lox_expr::{
    error::{Error, RuntimeError},
    interpreter::value::core::Value,
    run,
};

fn assert_value(src: &str, expected: impl Into<Value>) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected.into(), "{src}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expression '{src}' was expected to fail at runtime, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("-(2 + 3)", -5.0);
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);

    let nan = run("0 / 0").unwrap();
    assert!(nan.as_number().is_some_and(f64::is_nan));
}

#[test]
fn string_concatenation() {
    assert_value("\"a\" + \"b\"", "ab");
    assert_value("\"\" + \"\"", "");
    assert_value("(\"a\" + \"b\") + \"c\"", "abc");
}

#[test]
fn mixed_addition_is_error() {
    let error = assert_runtime_failure("1 + \"b\"");

    assert_eq!(error,
               RuntimeError::InvalidAddition { operator: "+".to_string(),
                                               line:     1, });
    assert_runtime_failure("\"a\" + nil");
    assert_runtime_failure("true + 1");
}

#[test]
fn arithmetic_requires_numbers() {
    for src in ["\"a\" - 1", "2 * true", "nil / 1", "\"6\" * \"7\""] {
        assert!(matches!(assert_runtime_failure(src), RuntimeError::ExpectedNumbers { .. }),
                "{src}");
    }

    assert_eq!(assert_runtime_failure("1 *\n\"x\"").to_string(),
               "[line 1] Operator '*': Operands do not hold the same type, expected two numbers.");
}

#[test]
fn negation_requires_a_number() {
    assert_value("-3", -3.0);
    assert_value("--3", 3.0);

    let error = assert_runtime_failure("-\"3\"");
    assert!(matches!(error, RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn comparisons() {
    assert_value("2 < 3", true);
    assert_value("3 > 2", true);
    assert_value("2 <= 2", true);
    assert_value("3 >= 4", false);
    assert_value("1 + 1 < 3", true);

    assert_runtime_failure("1 < \"2\"");
    assert_runtime_failure("nil >= nil");
}

#[test]
fn equality_across_types() {
    assert_value("2 == 2.0", true);
    assert_value("2 == \"2\"", false);
    assert_value("2 != \"2\"", true);
    assert_value("nil == nil", true);
    assert_value("nil == false", false);
    assert_value("\"a\" == \"a\"", true);
    assert_value("true == true", true);
    assert_value("true != false", true);
    assert_value("0 / 0 == 0 / 0", false);
}

#[test]
fn truthiness() {
    assert_value("!nil", true);
    assert_value("!0", false);
    assert_value("!\"\"", false);
    assert_value("!true", false);
    assert_value("!false", true);
    assert_value("!!nil", false);
}

#[test]
fn comma_yields_rightmost_operand() {
    assert_value("1, 2", 2.0);
    assert_value("\"a\", nil, true", true);
    assert_value("(1, 2) + 3", 5.0);
}

#[test]
fn left_operand_errors_first() {
    // Both operands are ill-typed; the left one is evaluated first.
    let error = assert_runtime_failure("(-nil) + (1 - \"x\")");

    assert!(matches!(error, RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn comma_still_evaluates_its_left_operand() {
    assert_runtime_failure("-\"x\", 1");
}

#[test]
fn parse_errors_surface_through_run() {
    assert!(matches!(run("(1 + 2"), Err(Error::Parse(_))));
    assert!(matches!(run(""), Err(Error::Parse(_))));
}

#[test]
fn failures_map_to_exit_statuses() {
    assert_eq!(run("(1 + 2").unwrap_err().exit_code(), 65);
    assert_eq!(run("1 2").unwrap_err().exit_code(), 65);
    assert_eq!(runtime_exit_code("1 + \"b\""), 70);
    assert_eq!(runtime_exit_code("-nil"), 70);
}

fn runtime_exit_code(src: &str) -> u8 {
    Error::from(assert_runtime_failure(src)).exit_code()
}

#[test]
fn values_display() {
    assert_eq!(run("1 + 2").unwrap().to_string(), "3");
    assert_eq!(run("1 / 4").unwrap().to_string(), "0.25");
    assert_eq!(run("\"hi\"").unwrap().to_string(), "hi");
    assert_eq!(run("nil").unwrap().to_string(), "nil");
    assert_eq!(run("1 < 2").unwrap().to_string(), "true");
}
