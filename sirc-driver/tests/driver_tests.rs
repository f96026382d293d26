//! End-to-end tests for the driver library

use pretty_assertions::assert_eq;
use sirc_common::CompilerError;
use sirc_driver::{check_file, lower_file, parse_unit};
use std::fs;

const UNIT: &str = r#"{
    "functions": [
        { "name": "area", "params": ["w", "h"],
          "body": [{ "op": "*", "lhs": "w", "rhs": "h" }] },
        { "name": "scale", "ty": "f64", "params": ["x"],
          "body": [{ "op": "*", "lhs": "x", "rhs": 0.5 }] }
    ]
}"#;

const EXPECTED: &str =
    "{\n%var3 = mul nsw i32 %var1, %var2\n}\n{\n%var2 = fmul double %var1, 0.5\n}\n";

#[test]
fn test_lower_to_string() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("unit.json");
    fs::write(&input, UNIT).unwrap();

    let ir = lower_file(&input, None, true).unwrap();
    assert_eq!(ir.as_deref(), Some(EXPECTED));
}

#[test]
fn test_lower_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("unit.json");
    let output = dir.path().join("unit.ir");
    fs::write(&input, UNIT).unwrap();

    assert_eq!(lower_file(&input, Some(&output), false).unwrap(), None);
    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn test_check_counts_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("unit.json");
    fs::write(&input, UNIT).unwrap();

    assert_eq!(check_file(&input).unwrap(), 6);
}

#[test]
fn test_invalid_json_is_config_error() {
    let err = parse_unit("{ \"functions\": 3 }").unwrap_err();
    assert!(matches!(err, CompilerError::Config { .. }));
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = check_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CompilerError::Io { .. }));
}

fn lower_source(source: &str) -> Result<String, CompilerError> {
    parse_unit(source).and_then(|unit| sirc_ir::compile_unit(&unit, false))
}

#[test]
fn test_unsupported_operator_names_function() {
    let err = lower_source(
        r#"{ "functions": [
            { "name": "half", "params": ["n"], "body": [{ "op": "/", "lhs": "n", "rhs": 2 }] }
        ] }"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Code generation error in half: Unsupported operator '/'");
}

#[test]
fn test_unknown_operator_token_is_codegen_error() {
    let err = lower_source(
        r#"{ "functions": [
            { "name": "f", "params": ["a"], "body": [{ "op": "**", "lhs": "a", "rhs": 2 }] }
        ] }"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        CompilerError::Codegen {
            function: "f".to_string(),
            message: "Unsupported operator '**'".to_string(),
        }
    );
}
